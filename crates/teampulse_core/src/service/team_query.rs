//! In-memory team-directory search.

use crate::model::team::TeamMember;

/// Returns members whose name, role or email contains `query`,
/// case-insensitively. An empty query matches everyone.
pub fn search_members<'a>(members: &'a [TeamMember], query: &str) -> Vec<&'a TeamMember> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return members.iter().collect();
    }

    members
        .iter()
        .filter(|member| {
            member.name.to_lowercase().contains(&needle)
                || member.role.to_lowercase().contains(&needle)
                || member
                    .email
                    .as_deref()
                    .is_some_and(|text| text.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::search_members;
    use crate::model::team::TeamMember;

    #[test]
    fn search_covers_name_role_and_email() {
        let mut lena = TeamMember::new("Léna Morel", "Product Designer");
        lena.email = Some("lena@example.com".to_string());
        let sam = TeamMember::new("Sam Ito", "Backend Engineer");
        let members = vec![lena, sam];

        assert_eq!(search_members(&members, "designer").len(), 1);
        assert_eq!(search_members(&members, "ENGINEER").len(), 1);
        assert_eq!(search_members(&members, "example.com").len(), 1);
        assert_eq!(search_members(&members, "").len(), 2);
    }
}
