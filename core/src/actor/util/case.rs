/// `TemperatureValue`, `temperature-value` and `temperature value` all become
/// `temperature_value`.
pub fn to_snake_case(name: &str) -> String {
  let mut out = String::with_capacity(name.len() + 4);
  let mut prev_lower_or_digit = false;
  for c in name.trim().chars() {
    if c == '-' || c == '_' || c.is_whitespace() {
      if !out.is_empty() && !out.ends_with('_') {
        out.push('_');
      }
      prev_lower_or_digit = false;
    } else if c.is_uppercase() {
      if prev_lower_or_digit {
        out.push('_');
      }
      out.extend(c.to_lowercase());
      prev_lower_or_digit = false;
    } else {
      out.push(c);
      prev_lower_or_digit = c.is_lowercase() || c.is_ascii_digit();
    }
  }
  while out.ends_with('_') {
    out.pop();
  }
  out
}

pub fn to_kebab_case(name: &str) -> String {
  to_snake_case(name).replace('_', "-")
}

#[cfg(test)]
mod tests {
  use rstest::rstest;

  use super::*;

  #[rstest]
  #[case("temperature", "temperature")]
  #[case("TemperatureValue", "temperature_value")]
  #[case("temperature-value", "temperature_value")]
  #[case("temperature value", "temperature_value")]
  #[case("dispatch_errors", "dispatch_errors")]
  #[case("HTTPServer", "httpserver")]
  #[case("sensor2Reading", "sensor2_reading")]
  fn test_to_snake_case(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(to_snake_case(input), expected);
  }

  #[rstest]
  #[case("temperature_value", "temperature-value")]
  #[case("TemperatureValue", "temperature-value")]
  #[case("property-change", "property-change")]
  fn test_to_kebab_case(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(to_kebab_case(input), expected);
  }
}
