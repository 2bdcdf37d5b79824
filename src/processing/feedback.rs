//! Table-driven tip and strength composition shared by both scorers

/// One scored component plus the context its messages interpolate
/// (missing section names, example verbs, the year shortfall, ...)
#[derive(Debug, Clone)]
pub struct ComponentSignal {
    pub component: &'static str,
    pub score: u8,
    pub context: String,
}

impl ComponentSignal {
    pub fn new(component: &'static str, score: u8, context: impl Into<String>) -> Self {
        Self {
            component,
            score,
            context: context.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Feedback {
    pub tips: Vec<String>,
    pub strengths: Vec<String>,
}

struct MessageTemplates {
    component: &'static str,
    tip: &'static str,
    strength: &'static str,
}

/// Component name -> message templates. Adding a scorer component means
/// adding a row here, nothing else.
static MESSAGES: &[MessageTemplates] = &[
    MessageTemplates {
        component: "Structure",
        tip: "Add or expand the missing resume sections: {}",
        strength: "Solid structure with all key sections covered",
    },
    MessageTemplates {
        component: "Contact",
        tip: "Include {} in the resume header",
        strength: "Complete contact details present",
    },
    MessageTemplates {
        component: "Action Verbs",
        tip: "Start bullet points with strong action verbs such as {}",
        strength: "Bullet points lead with strong action verbs",
    },
    MessageTemplates {
        component: "Quantified Impact",
        tip: "Quantify at least one bullet per role with a number, percentage, or dollar amount",
        strength: "Achievements are quantified with metrics",
    },
    MessageTemplates {
        component: "Skill Overlap",
        tip: "Add the missing required skills: {}",
        strength: "Skills cover the role requirements well",
    },
    MessageTemplates {
        component: "Experience Relevance",
        tip: "Highlight more relevant experience: {}",
        strength: "Experience meets the role's requirement",
    },
    MessageTemplates {
        component: "Education Alignment",
        tip: "Call out a degree matching the requirement: {}",
        strength: "Education aligns with the requirement",
    },
    MessageTemplates {
        component: "Title Fit",
        tip: "Mirror the target role title in your most recent headline: {}",
        strength: "Recent title closely matches the target role",
    },
];

/// Compose feedback from component signals.
///
/// Tips come from components below `tip_threshold`, worst score first
/// (stable on ties), so the highest-leverage fix leads. Strengths come from
/// components at or above `strength_threshold`, in signal order.
pub fn compose(signals: &[ComponentSignal], tip_threshold: u8, strength_threshold: u8) -> Feedback {
    let mut shortfalls: Vec<&ComponentSignal> = signals
        .iter()
        .filter(|s| s.score < tip_threshold)
        .collect();
    shortfalls.sort_by_key(|s| s.score);

    let tips = shortfalls
        .iter()
        .filter_map(|s| templates_for(s.component).map(|t| fill(t.tip, &s.context)))
        .collect();

    let strengths = signals
        .iter()
        .filter(|s| s.score >= strength_threshold)
        .filter_map(|s| templates_for(s.component).map(|t| t.strength.to_string()))
        .collect();

    Feedback { tips, strengths }
}

fn templates_for(component: &str) -> Option<&'static MessageTemplates> {
    MESSAGES.iter().find(|m| m.component == component)
}

fn fill(template: &str, context: &str) -> String {
    template.replace("{}", context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tips_ordered_worst_first() {
        let signals = vec![
            ComponentSignal::new("Structure", 57, "projects"),
            ComponentSignal::new("Contact", 0, "an email address and a phone number"),
            ComponentSignal::new("Action Verbs", 40, "Led, Built, Optimized"),
        ];
        let feedback = compose(&signals, 70, 90);
        assert_eq!(feedback.tips.len(), 3);
        assert!(feedback.tips[0].starts_with("Include an email address"));
        assert!(feedback.tips[1].starts_with("Start bullet points"));
        assert!(feedback.tips[2].starts_with("Add or expand"));
    }

    #[test]
    fn test_thresholds_are_exclusive_for_tips_inclusive_for_strengths() {
        let signals = vec![
            ComponentSignal::new("Structure", 70, ""),
            ComponentSignal::new("Contact", 90, ""),
        ];
        let feedback = compose(&signals, 70, 90);
        assert!(feedback.tips.is_empty());
        assert_eq!(feedback.strengths, vec!["Complete contact details present"]);
    }

    #[test]
    fn test_context_interpolation() {
        let signals = vec![ComponentSignal::new("Structure", 10, "summary, projects")];
        let feedback = compose(&signals, 70, 90);
        assert_eq!(
            feedback.tips[0],
            "Add or expand the missing resume sections: summary, projects"
        );
    }

    #[test]
    fn test_tie_keeps_signal_order() {
        let signals = vec![
            ComponentSignal::new("Action Verbs", 50, "Led"),
            ComponentSignal::new("Quantified Impact", 50, ""),
        ];
        let feedback = compose(&signals, 70, 90);
        assert!(feedback.tips[0].starts_with("Start bullet points"));
        assert!(feedback.tips[1].starts_with("Quantify"));
    }
}
