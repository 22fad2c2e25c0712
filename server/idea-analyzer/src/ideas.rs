//! Canned SaaS ideas for the offline "generate idea" button.

use rand::seq::SliceRandom;
use rand::Rng;

pub const FALLBACK_IDEAS: [&str; 8] = [
  "A project management platform specifically designed for remote creative teams, featuring \
real-time collaboration tools, automated workflow tracking, and integrated client feedback \
systems to streamline the creative process from concept to delivery.",
  "An AI-powered customer support automation tool that learns from existing support tickets to \
provide instant, personalized responses while seamlessly escalating complex issues to human \
agents, reducing response times by 80%.",
  "A comprehensive employee wellness platform that combines mental health resources, fitness \
tracking, and productivity analytics to help companies improve employee satisfaction and \
reduce burnout in hybrid work environments.",
  "A smart inventory management system for small e-commerce businesses that uses predictive \
analytics to optimize stock levels, automate reordering, and prevent stockouts while \
minimizing carrying costs.",
  "A social media content planning and automation platform that uses AI to generate engaging \
posts, optimal posting schedules, and performance insights tailored to each brand's unique \
voice and audience.",
  "A financial planning SaaS for freelancers and gig workers that tracks irregular income, \
automates tax savings, provides cash flow forecasting, and offers personalized budgeting \
recommendations.",
  "An all-in-one event management platform that handles registration, ticketing, networking \
facilitation, and post-event analytics, specifically designed for professional conferences and \
corporate events.",
  "A code review and collaboration tool that uses machine learning to identify potential bugs, \
security vulnerabilities, and performance issues while facilitating seamless team code reviews \
and knowledge sharing.",
];

/// One idea picked uniformly from the pool.
pub fn random_idea_with_rng<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
  // The pool is a non-empty constant.
  FALLBACK_IDEAS.choose(rng).copied().unwrap_or(FALLBACK_IDEAS[0])
}

pub fn random_idea() -> &'static str {
  random_idea_with_rng(&mut rand::thread_rng())
}
