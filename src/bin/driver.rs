//! Demo driver: builds a tree from random values, degrades its balance with
//! a run of large inserts, and rebalances it, printing the tree and its
//! traversal orders along the way.

use bst_set::tree::{Node, Tree, TraversalError};
use rand::Rng;

fn random_values(count: usize, max: i32) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| rng.gen_range(0..max)).collect()
}

fn print_traversals(tree: &Tree<i32>) -> Result<(), TraversalError> {
    let mut print_node = |node: &Node<i32>| print!("{} ", node.value());

    print!("level order: ");
    tree.level_order(Some(&mut print_node))?;
    println!();

    print!("pre order:   ");
    tree.pre_order(Some(&mut print_node))?;
    println!();

    print!("in order:    ");
    tree.in_order(Some(&mut print_node))?;
    println!();

    print!("post order:  ");
    tree.post_order(Some(&mut print_node))?;
    println!();

    Ok(())
}

fn main() -> Result<(), TraversalError> {
    let mut tree = Tree::build(&random_values(10, 100));
    println!("initial tree (built from {:?}):", tree.source());
    print!("{tree}");
    println!("balanced: {}", tree.is_balanced());
    print_traversals(&tree)?;

    for value in [101, 105, 112, 127, 134] {
        tree.insert(value);
    }
    println!("\nafter inserting values > 100:");
    print!("{tree}");
    println!("balanced: {}", tree.is_balanced());

    tree.rebalance();
    println!("\nafter rebalancing:");
    print!("{tree}");
    println!("balanced: {}", tree.is_balanced());
    print_traversals(&tree)?;

    Ok(())
}
