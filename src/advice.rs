//! Keyword-based advice selection.
//!
//! A message is lower-cased and checked against a fixed keyword table in
//! priority order. The first keyword found picks the advice; a message with
//! none of them gets the general planning text.

/// The advice categories a message can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceTopic {
    Budget,
    Investment,
    Debt,
    Savings,
    General,
}

/// Keywords in match priority order. First hit wins.
const KEYWORDS: [(&str, AdviceTopic); 4] = [
    ("budget", AdviceTopic::Budget),
    ("invest", AdviceTopic::Investment),
    ("debt", AdviceTopic::Debt),
    ("save", AdviceTopic::Savings),
];

const BUDGET_ADVICE: &str = "**Budget Advice:** Use the 50/30/20 rule - 50% needs, 30% wants, 20% savings. Track expenses monthly and automate savings.";
const INVESTMENT_ADVICE: &str = "**Investment Advice:** Start with index funds (VTI/VXUS), max out 401k match, open Roth IRA. Diversify and invest consistently.";
const DEBT_ADVICE: &str = "**Debt Strategy:** Use debt avalanche (highest interest first) or snowball (smallest balance first). Pay more than minimums.";
const SAVINGS_ADVICE: &str = "**Savings Plan:** Build 3-6 month emergency fund first, then 15% to retirement. Use high-yield savings accounts.";
const GENERAL_ADVICE: &str = "**Financial Planning:** Focus on emergency fund, debt payoff, retirement savings, and diversified investing. What specific area interests you?";

impl AdviceTopic {
    /// Classify a free-form message.
    pub fn classify(message: &str) -> Self {
        let msg = message.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(keyword, _)| msg.contains(keyword))
            .map(|&(_, topic)| topic)
            .unwrap_or(AdviceTopic::General)
    }

    /// Markdown advice text for this topic.
    pub fn text(self) -> &'static str {
        match self {
            AdviceTopic::Budget => BUDGET_ADVICE,
            AdviceTopic::Investment => INVESTMENT_ADVICE,
            AdviceTopic::Debt => DEBT_ADVICE,
            AdviceTopic::Savings => SAVINGS_ADVICE,
            AdviceTopic::General => GENERAL_ADVICE,
        }
    }

    /// Short name used as a log field.
    pub fn label(self) -> &'static str {
        match self {
            AdviceTopic::Budget => "budget",
            AdviceTopic::Investment => "investment",
            AdviceTopic::Debt => "debt",
            AdviceTopic::Savings => "savings",
            AdviceTopic::General => "general",
        }
    }
}

/// Advice text for a message.
pub fn get_advice(message: &str) -> &'static str {
    AdviceTopic::classify(message).text()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_keyword_selects_its_advice() {
        assert!(get_advice("help me budget").starts_with("**Budget Advice:**"));
        assert!(get_advice("where to invest?").starts_with("**Investment Advice:**"));
        assert!(get_advice("credit card debt").starts_with("**Debt Strategy:**"));
        assert!(get_advice("how do I save more").starts_with("**Savings Plan:**"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(AdviceTopic::classify("BUDGET"), AdviceTopic::Budget);
        assert_eq!(AdviceTopic::classify("InVeStInG"), AdviceTopic::Investment);
        assert_eq!(AdviceTopic::classify("My DEBTS"), AdviceTopic::Debt);
        assert_eq!(AdviceTopic::classify("Saves"), AdviceTopic::Savings);
    }

    #[test]
    fn keywords_match_as_substrings() {
        // "investment" contains "invest", "budgeting" contains "budget"
        assert_eq!(AdviceTopic::classify("investment tips"), AdviceTopic::Investment);
        assert_eq!(AdviceTopic::classify("budgeting apps"), AdviceTopic::Budget);
    }

    #[test]
    fn earlier_keyword_wins() {
        assert_eq!(
            AdviceTopic::classify("should I invest or budget first?"),
            AdviceTopic::Budget
        );
        assert_eq!(
            AdviceTopic::classify("save or pay off debt"),
            AdviceTopic::Debt
        );
        assert_eq!(
            AdviceTopic::classify("invest to save on debt"),
            AdviceTopic::Investment
        );
    }

    #[test]
    fn no_keyword_falls_back_to_general() {
        assert_eq!(AdviceTopic::classify("hello there"), AdviceTopic::General);
        assert_eq!(AdviceTopic::classify(""), AdviceTopic::General);
        assert!(get_advice("").starts_with("**Financial Planning:**"));
    }

    #[test]
    fn example_budget_question() {
        let advice = get_advice("How should I budget this month?");
        assert!(advice.starts_with("**Budget Advice:** Use the 50/30/20 rule"));
    }

    #[test]
    fn labels_are_distinct() {
        let topics = [
            AdviceTopic::Budget,
            AdviceTopic::Investment,
            AdviceTopic::Debt,
            AdviceTopic::Savings,
            AdviceTopic::General,
        ];
        for (i, a) in topics.iter().enumerate() {
            for b in &topics[i + 1..] {
                assert_ne!(a.label(), b.label());
                assert_ne!(a.text(), b.text());
            }
        }
    }
}
