//! Keyword filter over applications
//!
//! Substring matching, no ranking: results keep the source order.

use shared::Application;

/// Trimmed keyword, or `None` when there is nothing to search for
pub fn normalize_keyword(raw: &str) -> Option<&str> {
    let keyword = raw.trim();
    (!keyword.is_empty()).then_some(keyword)
}

/// Name, email and national ID match case-insensitively; phone matches as typed
pub fn matches_keyword(application: &Application, keyword: &str) -> bool {
    let needle = keyword.to_lowercase();

    application.full_name.to_lowercase().contains(&needle)
        || application.email.to_lowercase().contains(&needle)
        || application.national_id.to_lowercase().contains(&needle)
        || application.phone.contains(keyword)
}

pub fn filter_applications(applications: Vec<Application>, keyword: &str) -> Vec<Application> {
    applications
        .into_iter()
        .filter(|application| matches_keyword(application, keyword))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applicant(id: i64, name: &str, email: &str, national_id: &str, phone: &str) -> Application {
        Application {
            id: id.into(),
            full_name: name.to_string(),
            email: email.to_string(),
            national_id: national_id.to_string(),
            phone: phone.to_string(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<Application> {
        vec![
            applicant(1, "Nguyễn Văn An", "an.nguyen@example.com", "001205000111", "0912000111"),
            applicant(2, "Trần Thị Bình", "binh@example.com", "079305000222", "0988000222"),
            applicant(3, "Le Nguyen Hoa", "le@school.edu.vn", "0313050003AB", "0977000333"),
        ]
    }

    fn ids(applications: &[Application]) -> Vec<i64> {
        applications.iter().filter_map(|a| a.id.as_number()).collect()
    }

    #[test]
    fn test_blank_keyword_is_rejected() {
        assert_eq!(normalize_keyword(""), None);
        assert_eq!(normalize_keyword("   \t"), None);
        assert_eq!(normalize_keyword("  an "), Some("an"));
    }

    #[test]
    fn test_case_insensitive_on_name() {
        let upper = filter_applications(sample(), "NGUYỄN");
        let lower = filter_applications(sample(), "nguyễn");

        assert_eq!(ids(&upper), vec![1]);
        assert_eq!(ids(&upper), ids(&lower));
    }

    #[test]
    fn test_matches_email_and_national_id() {
        assert_eq!(ids(&filter_applications(sample(), "SCHOOL.EDU")), vec![3]);
        assert_eq!(ids(&filter_applications(sample(), "3ab")), vec![3]);
    }

    #[test]
    fn test_phone_is_substring_match() {
        assert_eq!(ids(&filter_applications(sample(), "000222")), vec![2]);
    }

    #[test]
    fn test_results_keep_source_order() {
        // "nguyen" hits record 3 by name and record 1 by email
        let found = filter_applications(sample(), "nguyen");

        assert_eq!(ids(&found), vec![1, 3]);
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert!(filter_applications(sample(), "zzz").is_empty());
    }
}
