//! Offline "enhance" for the idea textarea: append a canned business paragraph.

/// Ideas with fewer words than this get the generic paragraph.
pub const SHORT_IDEA_WORDS: usize = 10;

const GENERIC_ENHANCEMENT: &str = "This SaaS solution addresses a specific market need by \
providing a comprehensive platform that streamlines operations and improves efficiency for \
businesses. The target market includes small to medium-sized enterprises looking to optimize \
their workflows and reduce operational costs.

Key features would include user-friendly interface, real-time analytics, integration \
capabilities with existing tools, and scalable architecture to grow with the business. The \
solution offers significant value proposition through cost reduction, time savings, and \
improved productivity metrics.

The business model would focus on subscription-based pricing with tiered plans to accommodate \
different business sizes and needs, ensuring sustainable revenue growth and customer \
retention.";

const DETAILED_ENHANCEMENT: &str = "Building on this concept, the solution would target \
specific industry verticals where this problem is most acute, offering specialized features \
and integrations that address unique workflow requirements. The platform would differentiate \
itself through superior user experience, advanced automation capabilities, and comprehensive \
analytics that provide actionable insights.

The go-to-market strategy would focus on demonstrating clear ROI through pilot programs and \
case studies, establishing partnerships with industry leaders, and building a strong customer \
success program to ensure high retention rates and organic growth through referrals.";

/// The text as given, a blank line, then the paragraph matching its length:
/// generic for short ideas, a go-to-market follow-up for detailed ones.
pub fn fallback_enhancement(text: &str) -> String {
  let paragraph = if text.split_whitespace().count() < SHORT_IDEA_WORDS {
    GENERIC_ENHANCEMENT
  } else {
    DETAILED_ENHANCEMENT
  };
  format!("{}\n\n{}", text, paragraph)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn nine_words_get_generic_paragraph() {
    let text = "one two three four five six seven eight nine";
    let out = fallback_enhancement(text);
    assert!(out.starts_with("one two three four five six seven eight nine\n\n"));
    assert!(out.ends_with(GENERIC_ENHANCEMENT));
  }

  #[test]
  fn ten_words_get_detailed_paragraph() {
    let text = "one two three four five six seven eight nine ten";
    let out = fallback_enhancement(text);
    assert!(out.ends_with(DETAILED_ENHANCEMENT));
    assert!(out.contains("Building on this concept"));
  }

  #[test]
  fn whitespace_runs_count_once() {
    let text = "  one\ttwo\n\nthree    four five six seven eight nine  ";
    assert!(fallback_enhancement(text).ends_with(GENERIC_ENHANCEMENT));
  }

  #[test]
  fn empty_text_is_short() {
    assert_eq!(fallback_enhancement(""), format!("\n\n{}", GENERIC_ENHANCEMENT));
  }
}
