//! Parenthesis balance checking

/// Returns true when every `)` closes an earlier `(` and none are left open.
#[must_use]
pub fn is_balanced(expression: &str) -> bool {
    let mut stack: Vec<char> = Vec::new();

    for ch in expression.chars() {
        match ch {
            '(' => stack.push(ch),
            ')' => {
                if stack.pop().is_none() {
                    return false;
                }
            }
            _ => {}
        }
    }

    stack.is_empty()
}
