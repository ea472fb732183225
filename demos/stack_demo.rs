//! Standalone runner that demonstrates the linked-list stack operations.

use fundamentals::data_structures::stack::Stack;

fn main() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    stack.push(3);

    println!("=== Stack after push 1, 2, 3 ===");
    println!("is_empty: {}", stack.is_empty());
    println!("{stack}");

    if let Ok(value) = stack.pop() {
        println!("=== Stack after popping {value} ===");
        println!("{stack}");
    }
}
