/// Búsqueda por subcadena sin distinguir mayúsculas.
///
/// Una consulta vacía (o solo espacios) coincide con todo. La consulta
/// coincide si está contenida en al menos uno de los campos.
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches_query("", &["anything"]));
        assert!(matches_query("   ", &[]));
    }

    #[test]
    fn match_is_case_insensitive_across_fields() {
        assert!(matches_query("NORTH", &["Central", "northside church"]));
        assert!(!matches_query("south", &["Central", "northside church"]));
    }
}
