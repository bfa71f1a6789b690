// What a driving layer (a visualizer, a REPL) sees from the tree: the
// outcome of each call plus a callback for every rotation as it fires.
use aplomb::{Insert, Remove, Rotation, Tree, TreeCallbacks};

struct PrintRotations;

impl TreeCallbacks for PrintRotations {
    type Value = i32;

    fn rotate(&mut self, rotation: Rotation, at: &i32) {
        println!("  imbalance! {rotation} rotation applied at {at}");
    }
}

fn main() {
    let mut tree = Tree::with_callbacks(PrintRotations);

    for value in [14, 17, 11, 7, 53, 4, 13, 12, 8, 13] {
        println!("insert {value}");
        match tree.insert(value) {
            Insert::Inserted(_) => {}
            Insert::Duplicate(value) => println!("  {value} already exists in the tree"),
        }
    }

    println!("total nodes: {} | tree height: {}", tree.len(), tree.height());
    println!("inorder:   {:?}", tree.inorder());
    println!("preorder:  {:?}", tree.preorder());
    println!("postorder: {:?}", tree.postorder());

    match tree.find(&13) {
        Some(node) => println!(
            "13 found: height {}, balance factor {}",
            node.height, node.balance
        ),
        None => println!("13 not found"),
    }

    for value in [11, 99] {
        println!("remove {value}");
        match tree.remove(&value) {
            Remove::Removed(value, Some(last)) => println!("  {value} removed; {last}"),
            Remove::Removed(value, None) => println!("  {value} removed"),
            Remove::NotFound => println!("  {value} not found in the tree"),
        }
    }

    println!("inorder:   {:?}", tree.inorder());
}
