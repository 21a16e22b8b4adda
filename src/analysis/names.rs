/// Canonical form of a summoner name for comparison: lower-cased with all
/// spaces removed. Display keeps the name as configured.
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != ' ')
        .flat_map(char::to_lowercase)
        .collect()
}
