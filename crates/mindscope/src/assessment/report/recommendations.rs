use serde::Serialize;

use super::super::domain::{DimensionKey, ScoreLevel};
use super::super::scoring::DimensionScore;

/// Canned guidance for one (dimension, level) pair.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Guidance {
    pub summary: &'static str,
    pub suggestions: &'static [&'static str],
}

/// Prioritized guidance for one dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub dimension: DimensionKey,
    pub dimension_name: String,
    pub level: ScoreLevel,
    pub percentage: u8,
    pub summary: &'static str,
    pub suggestions: &'static [&'static str],
}

/// Orders dimensions worst first and attaches their guidance.
///
/// Ties on percentage keep catalog order regardless of the input order.
pub fn generate(dimension_scores: &[DimensionScore]) -> Vec<Recommendation> {
    let mut ordered: Vec<&DimensionScore> = dimension_scores.iter().collect();
    ordered.sort_by_key(|score| (score.percentage, score.key.index()));

    ordered
        .into_iter()
        .map(|score| {
            let guidance = guidance(score.key, score.level);
            Recommendation {
                dimension: score.key,
                dimension_name: score.name.clone(),
                level: score.level,
                percentage: score.percentage,
                summary: guidance.summary,
                suggestions: guidance.suggestions,
            }
        })
        .collect()
}

pub(crate) fn guidance(dimension: DimensionKey, level: ScoreLevel) -> &'static Guidance {
    &GUIDANCE[dimension.index()][level.index()]
}

const fn table_is_complete(table: &[[Guidance; ScoreLevel::COUNT]; DimensionKey::COUNT]) -> bool {
    let mut row = 0;
    while row < table.len() {
        let mut column = 0;
        while column < table[row].len() {
            let entry = &table[row][column];
            if entry.summary.is_empty() || entry.suggestions.is_empty() {
                return false;
            }
            let mut item = 0;
            while item < entry.suggestions.len() {
                if entry.suggestions[item].is_empty() {
                    return false;
                }
                item += 1;
            }
            column += 1;
        }
        row += 1;
    }
    true
}

const _: () = assert!(
    table_is_complete(&GUIDANCE_TABLE),
    "every dimension and level needs a summary and at least one suggestion"
);

static GUIDANCE: [[Guidance; ScoreLevel::COUNT]; DimensionKey::COUNT] = GUIDANCE_TABLE;

// Rows follow catalog order; columns run Critical, Concern, Average, Good, Excellent.
const GUIDANCE_TABLE: [[Guidance; ScoreLevel::COUNT]; DimensionKey::COUNT] = [
    // Emotion
    [
        Guidance {
            summary: "Your emotional state is a real concern. You may be going through serious anxiety, depression or stress. Please seek professional help.",
            suggestions: &[
                "Contact a counselor or psychiatrist as soon as you can",
                "If you feel overwhelmed or unsafe, call a crisis helpline or emergency services right away",
                "Tell a family member or friend you trust how you really feel",
                "Keep a basic daily routine going, even when it is hard",
            ],
        },
        Guidance {
            summary: "You may be dealing with a lot of anxiety, stress or low mood. These feelings deserve to be taken seriously.",
            suggestions: &[
                "Consider talking things through with a professional counselor",
                "Write a short safety list of three to five activities that help you feel settled",
                "Practice 4-7-8 breathing: breathe in for 4 seconds, hold for 7, breathe out for 8",
                "Spend less time alone and stay in touch with people who care about you",
            ],
        },
        Guidance {
            summary: "Your mood goes up and down and you may often feel stressed or anxious. It is worth paying attention to.",
            suggestions: &[
                "Set aside 10 to 15 minutes a day for mindfulness or slow breathing",
                "Notice which situations tend to trigger difficult feelings and plan a response in advance",
                "Cut down on information overload and limit time on social media",
                "Share how you feel with a friend or family member you trust",
            ],
        },
        Guidance {
            summary: "Your emotional state is generally good. Your mood shifts now and then, but you handle it well overall.",
            suggestions: &[
                "Learn a deep breathing or progressive muscle relaxation technique",
                "Keep a regular mood journal to notice and reflect on changes",
                "Stay physically active; regular exercise helps steady your mood",
            ],
        },
        Guidance {
            summary: "You manage your emotions very well and cope comfortably with everyday stress and ups and downs.",
            suggestions: &[
                "Keep doing what already works for you",
                "Share what you have learned about managing emotions with people around you",
                "Hold on to helpful habits such as mindfulness and relaxation",
            ],
        },
    ],
    // SelfEsteem
    [
        Guidance {
            summary: "Your self-esteem is very low and you may hold harsh views of yourself. Please think seriously about getting support.",
            suggestions: &[
                "Seek professional therapy soon; cognitive behavioral therapy is effective for building self-esteem",
                "Write yourself a letter listing the reasons you deserve love and respect",
                "Start a simple daily ritual of self-affirmation",
                "Distance yourself from people who belittle or put you down",
            ],
        },
        Guidance {
            summary: "You may be struggling with low self-worth or strong self-doubt, and it is affecting your quality of life.",
            suggestions: &[
                "Consider counseling; a professional can offer support tailored to you",
                "Practice cognitive restructuring by asking whether your negative self-judgments are really fair",
                "Join a course or workshop that builds self-efficacy",
                "Spend time with supportive people and less time in judgmental settings",
            ],
        },
        Guidance {
            summary: "How you see yourself varies, and you may lack confidence in some areas.",
            suggestions: &[
                "Make a list of your personal strengths and add to it regularly",
                "Compare yourself less with others and focus on your own progress",
                "Step outside your comfort zone by joining a new social or learning activity",
                "Practice self-compassion: treat yourself the way you would treat a good friend",
            ],
        },
        Guidance {
            summary: "Your self-image is healthy overall and you have a fair amount of confidence, with occasional self-doubt.",
            suggestions: &[
                "Write down three things you did well each day to build positive self-talk",
                "Set small, achievable goals and let completing them grow your confidence",
                "Learn to separate \"I did badly\" from \"I am not good enough\"",
            ],
        },
        Guidance {
            summary: "You have a strong sense of self-worth and confidence, and you accept yourself well.",
            suggestions: &[
                "Keep developing your strengths and interests",
                "Use your confidence to encourage and support others",
                "Keep up the habit of self-reflection and continue to grow",
            ],
        },
    ],
    // Interpersonal
    [
        Guidance {
            summary: "You are facing serious difficulties with relationships and may feel deeply isolated. Professional help matters here.",
            suggestions: &[
                "Seek professional counseling, ideally with a focus on interpersonal therapy",
                "Do not push yourself into close relationships right away; start with simple everyday interactions",
                "If social situations frighten you, cognitive behavioral and exposure therapy can help",
                "Look for peer support groups online or in person",
            ],
        },
        Guidance {
            summary: "You may be finding relationships hard and feel lonely or unable to trust others.",
            suggestions: &[
                "Consider a social skills course or group counseling",
                "Start with one-to-one connections and widen your circle gradually",
                "Reflect on whether past experiences shape how you see relationships",
                "Use online communities as a lower-pressure place to start",
            ],
        },
        Guidance {
            summary: "There is room to improve your relationships, and you may sometimes find socializing hard or feel lonely.",
            suggestions: &[
                "Join a club or interest group where connections form around shared hobbies",
                "Practice expressing your needs and feelings instead of holding them back",
                "Practice starting conversations, beginning with a simple greeting",
                "Aim for at least one meaningful conversation with a friend each week",
            ],
        },
        Guidance {
            summary: "Your relationships are in good shape and you keep fairly steady social connections.",
            suggestions: &[
                "Arrange regular meetups or calls with friends",
                "Practice active listening and give others your full attention in conversation",
                "Learn nonviolent communication skills to deepen your relationships",
            ],
        },
        Guidance {
            summary: "You have excellent social skills and healthy relationships, and you build and maintain connections with ease.",
            suggestions: &[
                "Keep nurturing and deepening your most important relationships",
                "Be a source of support and a good listener for others",
                "Take part in community or volunteer activities to widen your circle",
            ],
        },
    ],
    // LifeSatisfaction
    [
        Guidance {
            summary: "You are deeply dissatisfied with life and may feel hopeless or unable to see a way forward. Please reach out for help.",
            suggestions: &[
                "Please think seriously about getting professional psychological support",
                "If you have thoughts of harming yourself, contact a crisis helpline or emergency services immediately",
                "Try to complete just one small thing each day without putting extra pressure on yourself",
                "Talk to someone who cares about you; you do not have to face this alone",
            ],
        },
        Guidance {
            summary: "You feel dissatisfied with life and may be short on motivation or hope for the future.",
            suggestions: &[
                "Explore the gap between what you hope for and where you are with a counselor",
                "Start with the small things that are easiest to change and build from there",
                "Create meaningful daily rituals, such as a morning tea break or an evening walk",
                "Take stock of your surroundings and whether something needs to change",
            ],
        },
        Guidance {
            summary: "Your satisfaction with life is middling, and you may feel a lack of direction or everyday enjoyment.",
            suggestions: &[
                "Revisit your values and life goals to confirm the direction you want",
                "Try noticing one small good moment every day",
                "Plan something you have always wanted to do but never got around to",
                "Spend more time with upbeat people and see how they approach life",
            ],
        },
        Guidance {
            summary: "You are fairly satisfied with life overall and can find enjoyment in everyday things.",
            suggestions: &[
                "Keep a gratitude journal and note three things you are thankful for each day",
                "Explore a new hobby or area of learning",
                "Balance work or study with leisure and leave time to enjoy yourself",
            ],
        },
        Guidance {
            summary: "You are satisfied with and enthusiastic about life, with a strong sense of happiness and purpose.",
            suggestions: &[
                "Share your joy and positive outlook with others",
                "Set new challenges and goals to keep growing",
                "Savor the good things in the present and keep practicing gratitude",
            ],
        },
    ],
    // Resilience
    [
        Guidance {
            summary: "You feel extremely fragile in the face of adversity and urgently need more effective ways to cope.",
            suggestions: &[
                "Seek professional psychological help as a priority",
                "Start with the most basic self-care: eating, sleeping and breathing",
                "Do not try to solve everything at once; focus on one thing at a time",
                "Accepting help is not weakness; it takes courage",
            ],
        },
        Guidance {
            summary: "When things get hard you may feel helpless or overwhelmed, and you rely on a narrow set of coping strategies.",
            suggestions: &[
                "Consider counseling to learn a wider range of coping strategies",
                "Practice reframing how you interpret difficult situations",
                "Keep a log of times you coped successfully to build confidence",
                "Learn emotion regulation skills such as mindfulness and self-compassion",
            ],
        },
        Guidance {
            summary: "Your resilience has room to grow, and heavy pressure may feel like a struggle.",
            suggestions: &[
                "Use a structured approach to problems: define it, list options, weigh them, act",
                "Build a growth mindset by turning \"I can't\" into \"I haven't learned it yet\"",
                "Build a support network so you know who to turn to in hard times",
                "Strengthen your tolerance for stress with gradually harder challenges",
            ],
        },
        Guidance {
            summary: "You have solid resilience and coping skills and handle most challenges well.",
            suggestions: &[
                "Put together a coping toolkit of strategies that work in different situations",
                "Practice seeing setbacks as chances to learn",
                "Develop at least one way of relaxing that helps you recover quickly",
            ],
        },
        Guidance {
            summary: "You are highly resilient and recover quickly from difficulty, often growing through it.",
            suggestions: &[
                "Share your coping strategies to help others build resilience",
                "Take on bigger goals that make use of your resilience",
                "Stay flexible and keep learning new ways of coping",
            ],
        },
    ],
    // PhysicalHealth
    [
        Guidance {
            summary: "Your physical and mental health is worrying, and long-running sleep and physical problems need serious attention.",
            suggestions: &[
                "See a doctor for a check-up as soon as possible",
                "If insomnia is severe, consider getting help from a sleep specialist",
                "Start by rebuilding the most basic regular routine",
                "Body and mind are connected; emotional struggles can show up as physical symptoms, so look after both",
            ],
        },
        Guidance {
            summary: "Your physical wellbeing is poor; you may often feel exhausted and sleep badly.",
            suggestions: &[
                "See a doctor to rule out physical health problems",
                "Create a bedtime routine: warm shower, quiet music, reading, then sleep",
                "Get at least 20 minutes of outdoor activity every day",
                "Learn progressive muscle relaxation to help you fall asleep",
            ],
        },
        Guidance {
            summary: "Your physical wellbeing is fair, though your sleep may be irregular or you may not be getting enough exercise.",
            suggestions: &[
                "Set a fixed schedule and get up and go to bed at the same times every day",
                "Start with 15 minutes of exercise a day and build up gradually",
                "Spend less time on screens before bed",
                "Eat a balanced diet and cut back on caffeine and sugar",
            ],
        },
        Guidance {
            summary: "Your physical wellbeing is good and you mostly keep up a healthy lifestyle.",
            suggestions: &[
                "Improve your sleep environment and aim for 7 to 9 hours of quality sleep",
                "Exercise more often, aiming for three to five sessions a week",
                "Keep a healthy balance between work or study and rest",
            ],
        },
        Guidance {
            summary: "Your physical wellbeing is excellent, with good sleep and healthy habits.",
            suggestions: &[
                "Keep up your current healthy lifestyle",
                "Try a new sport or healthy activity to keep things fresh",
                "Help the people around you build healthy habits",
            ],
        },
    ],
];
