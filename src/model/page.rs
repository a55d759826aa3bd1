use std::fmt;

/// Logical page of the app an issue was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageName {
    Login,
    ForgotPassword,
    Home,
    Plans,
    Unit,
    Courses,
    Lesson,
    TestCreate,
    TestHistory,
    TestSession,
    CaseExperienceDebrief,
    CaseExperience,
    CaseLibrary,
    AccountProfile,
    AccountProfileEdit,
    AccountPayments,
    AccountPaymentsUpdate,
}

struct PageRule {
    contains: &'static [&'static str],
    excludes: &'static [&'static str],
    page: PageName,
}

impl PageRule {
    fn matches(&self, url: &str) -> bool {
        self.contains.iter().all(|s| url.contains(s))
            && !self.excludes.iter().any(|s| url.contains(s))
    }
}

const fn rule(
    contains: &'static [&'static str],
    excludes: &'static [&'static str],
    page: PageName,
) -> PageRule {
    PageRule {
        contains,
        excludes,
        page,
    }
}

// Order matters: first match wins, so the narrower rules sit above the broader ones.
const RULES: &[PageRule] = &[
    // auth
    rule(&["/login"], &[], PageName::Login),
    rule(&["/forgot-password"], &[], PageName::ForgotPassword),
    // core
    rule(&["/home"], &[], PageName::Home),
    rule(&["/plans"], &[], PageName::Plans),
    rule(&["/unit"], &[], PageName::Unit),
    rule(&["/courses"], &[], PageName::Courses),
    rule(&["/chapter", "/lesson"], &[], PageName::Lesson),
    // qbank
    rule(&["/test/create"], &[], PageName::TestCreate),
    rule(&["/test/history"], &[], PageName::TestHistory),
    rule(&["/test/", "/session/"], &[], PageName::TestSession),
    // cases
    rule(&["/cases/", "viewDebrief=true"], &[], PageName::CaseExperienceDebrief),
    rule(&["/cases/"], &[], PageName::CaseExperience),
    rule(&["/cases"], &[], PageName::CaseLibrary),
    // account
    rule(&["/account/profile"], &["/edit"], PageName::AccountProfile),
    rule(&["/account/profile", "/edit"], &[], PageName::AccountProfileEdit),
    rule(
        &["/account/payments"],
        &["/update-billing-info"],
        PageName::AccountPayments,
    ),
    rule(
        &["/account/payments", "/update-billing-info"],
        &[],
        PageName::AccountPaymentsUpdate,
    ),
];

impl PageName {
    /// Classify a page URL by substring rules. Returns None when no rule matches.
    pub fn classify(url: &str) -> Option<PageName> {
        RULES.iter().find(|r| r.matches(url)).map(|r| r.page)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PageName::Login => "login",
            PageName::ForgotPassword => "forgot-password",
            PageName::Home => "home",
            PageName::Plans => "plans",
            PageName::Unit => "unit",
            PageName::Courses => "courses",
            PageName::Lesson => "lesson",
            PageName::TestCreate => "test-create",
            PageName::TestHistory => "test-history",
            PageName::TestSession => "test-session",
            PageName::CaseExperienceDebrief => "case-experience-debrief",
            PageName::CaseExperience => "case-experience",
            PageName::CaseLibrary => "case-library",
            PageName::AccountProfile => "account-profile",
            PageName::AccountProfileEdit => "account-profile-edit",
            PageName::AccountPayments => "account-payments",
            PageName::AccountPaymentsUpdate => "account-payments-update",
        }
    }
}

impl fmt::Display for PageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_each_rule() {
        let cases = [
            ("https://app.test/login", "login"),
            ("https://app.test/forgot-password", "forgot-password"),
            ("https://app.test/home", "home"),
            ("https://app.test/plans/annual", "plans"),
            ("https://app.test/unit/4", "unit"),
            ("https://app.test/courses", "courses"),
            ("https://app.test/chapter/2/lesson/7", "lesson"),
            ("https://app.test/test/create", "test-create"),
            ("https://app.test/test/history", "test-history"),
            ("https://app.test/test/9/session/3", "test-session"),
            ("https://app.test/cases/12?viewDebrief=true", "case-experience-debrief"),
            ("https://app.test/cases/12", "case-experience"),
            ("https://app.test/cases", "case-library"),
            ("https://app.test/account/profile", "account-profile"),
            ("https://app.test/account/profile/edit", "account-profile-edit"),
            ("https://app.test/account/payments", "account-payments"),
            (
                "https://app.test/account/payments/update-billing-info",
                "account-payments-update",
            ),
        ];
        for (url, expected) in cases {
            let page = PageName::classify(url).map(|p| p.as_str());
            assert_eq!(page, Some(expected), "{url}");
        }
    }

    #[test]
    fn unmatched_url_is_none() {
        assert_eq!(PageName::classify("https://app.test/about"), None);
        assert_eq!(PageName::classify(""), None);
    }

    #[test]
    fn debrief_wins_over_case_experience() {
        assert_eq!(
            PageName::classify("https://x/cases/123?viewDebrief=true"),
            Some(PageName::CaseExperienceDebrief)
        );
    }

    #[test]
    fn debrief_flag_without_case_id_is_library() {
        assert_eq!(
            PageName::classify("https://x/cases?viewDebrief=true"),
            Some(PageName::CaseLibrary)
        );
    }

    #[test]
    fn earlier_rule_shadows_later_one() {
        // "/home" is checked before the account rules.
        assert_eq!(
            PageName::classify("https://x/home/account/profile"),
            Some(PageName::Home)
        );
    }

    #[test]
    fn display_matches_label_token() {
        assert_eq!(PageName::AccountPaymentsUpdate.to_string(), "account-payments-update");
    }
}
