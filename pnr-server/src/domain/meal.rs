//! In-flight meal service codes.

/// Characters that may appear in a meal service token.
pub const MEAL_CODE_CHARS: &str = "BLDSMFHCVKOPRWYNG";

/// Describe a single meal service letter.
fn describe_letter(code: char) -> Option<&'static str> {
    let description = match code {
        'B' => "Breakfast",
        'L' => "Lunch",
        'D' => "Dinner",
        'S' => "Snack or Refreshments",
        'M' => "Meal (Non-Specific)",
        'F' => "Food for Purchase",
        'H' => "Hot Meal",
        'C' => "Complimentary Alcoholic Beverages",
        'V' => "Vegetarian Meal",
        'K' => "Kosher Meal",
        'O' => "Cold Meal",
        'P' => "Alcoholic Beverages for Purchase",
        'R' => "Refreshment",
        'W' => "Continental Breakfast",
        'Y' => "Duty-Free Sales Available",
        'N' => "No Meal Service",
        'G' => "Food and Beverages for Purchase",
        _ => return None,
    };
    Some(description)
}

/// Returns true if the whole token is a meal service code.
///
/// Partial matches are rejected so that terminal numbers, status codes and
/// similar short tokens are not mistaken for meals.
pub fn is_meal_code(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| MEAL_CODE_CHARS.contains(c))
}

/// Describe a meal code, joining multi-letter codes with " & ".
///
/// Letters without a description are dropped; if none remain the raw code
/// is returned unchanged.
///
/// # Examples
///
/// ```
/// use pnr_server::domain::describe_meal;
///
/// assert_eq!(describe_meal("B"), "Breakfast");
/// assert_eq!(describe_meal("LD"), "Lunch & Dinner");
/// assert_eq!(describe_meal("XQ"), "XQ");
/// ```
pub fn describe_meal(code: &str) -> String {
    let descriptions: Vec<&str> = code
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter_map(describe_letter)
        .collect();

    if descriptions.is_empty() {
        code.to_string()
    } else {
        descriptions.join(" & ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_allowed_letter_has_a_description() {
        for c in MEAL_CODE_CHARS.chars() {
            assert!(describe_letter(c).is_some(), "{c}");
        }
    }

    #[test]
    fn single_letter() {
        assert_eq!(describe_meal("D"), "Dinner");
        assert_eq!(describe_meal("n"), "No Meal Service");
    }

    #[test]
    fn multi_letter_joined() {
        assert_eq!(describe_meal("BL"), "Breakfast & Lunch");
        assert_eq!(describe_meal("DBS"), "Dinner & Breakfast & Snack or Refreshments");
    }

    #[test]
    fn partially_known_code_keeps_known_letters() {
        assert_eq!(describe_meal("BX"), "Breakfast");
    }

    #[test]
    fn unknown_code_degrades_to_raw() {
        assert_eq!(describe_meal("XZ"), "XZ");
    }

    #[test]
    fn whole_token_must_match() {
        assert!(is_meal_code("M"));
        assert!(is_meal_code("LD"));
        assert!(!is_meal_code(""));
        assert!(!is_meal_code("HK1"));
        assert!(!is_meal_code("T2"));
        assert!(!is_meal_code("E0/7M8"));
    }
}
