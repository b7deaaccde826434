//! Phone number repair

/// Local prefixes known to be damaged in the HR feed; 7-digit numbers
/// starting with these are not repaired.
const DAMAGED_PREFIXES: [&str; 2] = ["352392", "352273"];

/// Country-code markers stripped from the front, in order
const COUNTRY_CODE_MARKERS: [&str; 3] = ["+1 ", "+1-", "(1)"];

const LOCAL_AREA_CODE: &str = "352";

/// Format a free-text phone number as `(NNN) NNN-NNNN`, with an optional
/// ` ext. NNNN` suffix.
///
/// Returns an empty string when the number can't be repaired with
/// confidence. Never fails.
pub fn repair_phone_number(phone: &str) -> String {
    let mut text: String = phone
        .chars()
        .filter(char::is_ascii)
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string();

    for marker in COUNTRY_CODE_MARKERS {
        if let Some(rest) = text.strip_prefix(marker) {
            text = rest.to_string();
        }
    }

    let mut digits = digits_of(&text);
    let mut extension = String::new();

    if digits.len() > 10 || text.contains('x') {
        let split = text
            .rfind(' ')
            .filter(|&i| i > 0)
            .or_else(|| text.rfind('x').filter(|&i| i > 0));
        match split {
            Some(i) => {
                extension = digits_of(&text[i + 1..]);
                digits = digits_of(&text[..=i]);
            }
            None => {
                extension = digits.get(10..).unwrap_or("").to_string();
                digits.truncate(10);
            }
        }
    }

    let number = match digits.len() {
        7 if DAMAGED_PREFIXES.iter().any(|p| phone.starts_with(p)) => None,
        7 => Some(format!("({}) {}-{}", LOCAL_AREA_CODE, &digits[..3], &digits[3..])),
        10 => Some(format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])),
        5 if digits.starts_with('2') => Some(format!("(352) 392-{}", &digits[1..])),
        5 if digits.starts_with('3') => Some(format!("(352) 273-{}", &digits[1..])),
        _ => None,
    };

    match number {
        None => String::new(),
        Some(number) if extension.is_empty() => number,
        Some(number) => format!("{} ext. {}", number, extension),
    }
}

fn digits_of(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_digit_campus_numbers() {
        assert_eq!(repair_phone_number("27737"), "(352) 392-7737");
        assert_eq!(repair_phone_number("2-7737"), "(352) 392-7737");
        assert_eq!(repair_phone_number("34882"), "(352) 273-4882");
        assert_eq!(repair_phone_number("47737"), "");
    }

    #[test]
    fn test_ten_digit_numbers() {
        assert_eq!(repair_phone_number("352 484 2999"), "(352) 484-2999");
        assert_eq!(repair_phone_number("(352) 273-8989"), "(352) 273-8989");
        assert_eq!(repair_phone_number("352.273.8989"), "(352) 273-8989");
    }

    #[test]
    fn test_seven_digit_numbers_get_local_area_code() {
        assert_eq!(repair_phone_number("377 9999"), "(352) 377-9999");
    }

    #[test]
    fn test_damaged_prefixes_refused() {
        assert_eq!(repair_phone_number("3523921"), "");
        assert_eq!(repair_phone_number("352273-1 x 22"), "");
    }

    #[test]
    fn test_country_code_stripped() {
        assert_eq!(repair_phone_number("+1 352 388 2888"), "(352) 388-2888");
        assert_eq!(repair_phone_number("+1-352-388-2888"), "(352) 388-2888");
        assert_eq!(repair_phone_number("(1)352 388 2888"), "(352) 388-2888");
    }

    #[test]
    fn test_extensions() {
        assert_eq!(repair_phone_number("3-4882 X 9943"), "(352) 273-4882 ext. 9943");
        assert_eq!(
            repair_phone_number("272 2822 ext. 2999"),
            "(352) 272-2822 ext. 2999"
        );
        assert_eq!(repair_phone_number("3522738989x12"), "(352) 273-8989 ext. 12");
        assert_eq!(repair_phone_number("35227389891234"), "(352) 273-8989 ext. 1234");
    }

    #[test]
    fn test_unrepairable() {
        assert_eq!(repair_phone_number("888388"), "");
        assert_eq!(repair_phone_number("bd282"), "");
        assert_eq!(repair_phone_number(""), "");
        assert_eq!(repair_phone_number("   "), "");
    }

    #[test]
    fn test_non_ascii_ignored() {
        assert_eq!(repair_phone_number("352\u{00a0}484\u{2011}2999"), "(352) 484-2999");
    }
}
