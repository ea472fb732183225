//! Keypad letter combinations by recursive backtracking.
//!
//! Variables:
//!   digits  : &str         — input string, letters drawn per digit
//!   current : String       — partial combination, one letter per consumed digit
//!   result  : Vec<String>  — completed combinations, depth-first order
//!
//! Equations:
//!   letters('2') = "abc",  letters('3') = "def",  …,  letters('9') = "wxyz"
//!   |result| = Π |letters(dᵢ)|  over all input digits
//!   order: depth-first, ASCII order within each digit's letter group

const KEYPAD: &[(char, &str)] = &[
    ('2', "abc"),
    ('3', "def"),
    ('4', "ghi"),
    ('5', "jkl"),
    ('6', "mno"),
    ('7', "pqrs"),
    ('8', "tuv"),
    ('9', "wxyz"),
];

fn letters(digit: char) -> &'static str {
    KEYPAD
        .iter()
        .find(|(d, _)| *d == digit)
        .map(|(_, group)| *group)
        .unwrap_or("")
}

/// All letter combinations for `digits` under the telephone keypad mapping,
/// preserving digit order. An empty input yields no combinations, and so
/// does any input containing a character with no letter group.
pub fn letter_combinations(digits: &str) -> Vec<String> {
    fn backtrack(digits: &[char], index: usize, current: &mut String, result: &mut Vec<String>) {
        if index == digits.len() {
            result.push(current.clone());
            return;
        }
        for letter in letters(digits[index]).chars() {
            current.push(letter);
            backtrack(digits, index + 1, current, result);
            current.pop();
        }
    }

    if digits.is_empty() {
        return Vec::new();
    }
    let digits: Vec<char> = digits.chars().collect();
    let mut result = Vec::new();
    backtrack(&digits, 0, &mut String::new(), &mut result);
    result
}
