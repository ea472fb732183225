use fundamentals::combinatorics::letter_combinations::letter_combinations;

#[test]
fn two_three_expands_to_nine_pairs() {
    assert_eq!(
        letter_combinations("23"),
        ["ad", "ae", "af", "bd", "be", "bf", "cd", "ce", "cf"]
    );
}

#[test]
fn empty_input_yields_no_combinations() {
    assert!(letter_combinations("").is_empty());
}

#[test]
fn single_digit_yields_its_letter_group() {
    assert_eq!(letter_combinations("7"), ["p", "q", "r", "s"]);
}

#[test]
fn combination_count_is_product_of_group_sizes() {
    assert_eq!(letter_combinations("79").len(), 16);
    assert_eq!(letter_combinations("234").len(), 27);
}

#[test]
fn digit_without_letter_group_yields_nothing() {
    assert!(letter_combinations("1").is_empty());
    assert!(letter_combinations("21").is_empty());
}
