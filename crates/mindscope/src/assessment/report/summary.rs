use super::super::domain::ScoreLevel;

/// Headline text for the overall band.
///
/// Depends only on the level: two scores in the same band read identically. Kept apart
/// from the per-dimension guidance because it fills a different slot in the report.
pub fn summarize(level: ScoreLevel) -> &'static str {
    match level {
        ScoreLevel::Excellent => {
            "Your overall wellbeing is very good! You are doing well across every dimension, with strong emotional management, a healthy self-image and plenty of social support. Keep up your good habits, and remember to give yourself time to relax now and then."
        }
        ScoreLevel::Good => {
            "Your overall wellbeing is good. Most dimensions are in a healthy range and you have a solid foundation. Focus on the areas that scored a little lower and your wellbeing can improve even further."
        }
        ScoreLevel::Average => {
            "Your overall wellbeing is in the middle range. You are doing well in some areas, while others need attention. Now is a good time to start; small changes can make a big difference."
        }
        ScoreLevel::Concern => {
            "Your overall wellbeing needs attention. Several dimensions suggest you may be facing real challenges. Take the suggestions below seriously, and if the pressure feels heavy, do not hesitate to seek professional help."
        }
        ScoreLevel::Critical => {
            "Your overall wellbeing is a cause for concern. You may be going through difficulty and distress on several fronts. Please seek professional help as soon as you can; you do not have to carry this alone. Asking for help is an act of courage."
        }
    }
}
