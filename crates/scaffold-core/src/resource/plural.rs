//! Default pluralization for resource kinds

/// Regular English plural of a kind, lowercased (`Frigate` -> `frigates`)
pub fn regular_plural(kind: &str) -> String {
    let singular = kind.to_lowercase();

    if singular.is_empty() {
        return singular;
    }

    if ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| singular.ends_with(suffix))
    {
        return format!("{}es", singular);
    }

    if let Some(stem) = singular.strip_suffix('y') {
        let before_y = stem.chars().last();
        if before_y.is_some_and(|c| !"aeiou".contains(c)) {
            return format!("{}ies", stem);
        }
    }

    format!("{}s", singular)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_plurals() {
        assert_eq!(regular_plural("Frigate"), "frigates");
        assert_eq!(regular_plural("CronJob"), "cronjobs");
        assert_eq!(regular_plural("Ingress"), "ingresses");
        assert_eq!(regular_plural("Box"), "boxes");
        assert_eq!(regular_plural("Match"), "matches");
        assert_eq!(regular_plural("Policy"), "policies");
        assert_eq!(regular_plural("Gateway"), "gateways");
    }

    #[test]
    fn test_empty_kind() {
        assert_eq!(regular_plural(""), "");
    }
}
