/// Elements picked up by form validation.
pub const REQUIRED_SELECTOR: &str = "input[required], textarea[required], select[required]";
pub const INVALID_CLASS: &str = "is-invalid";

pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Checks every value and reports each one, so all blank fields can be
/// marked in a single pass.
pub fn check_required<'a, I>(values: I) -> (bool, Vec<bool>)
where
    I: IntoIterator<Item = &'a str>,
{
    let filled: Vec<bool> = values.into_iter().map(is_filled).collect();
    (filled.iter().all(|f| *f), filled)
}
