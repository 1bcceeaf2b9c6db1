use super::types::{AnswerOption, Dimension, Question};
use super::QuestionBank;

use Dimension::{Anxiety, Avoidance};

/// Built-in questionnaire content.
pub fn builtin_bank() -> QuestionBank {
    QuestionBank {
        core: core_items(),
        scenarios: scenario_items(),
        goals: goal_items(),
    }
}

fn core_items() -> Vec<Question> {
    vec![
        Question::likert("ANX_1", "I worry that the people I love won't stay with me.", Anxiety),
        Question::likert("ANX_2", "When my partner is slow to reply, I assume something is wrong.", Anxiety),
        Question::likert("ANX_3", "I need a lot of reassurance that I am cared for.", Anxiety).weighted(1.2),
        Question::likert("ANX_4", "I get frustrated when people aren't as close as I would like.", Anxiety),
        Question::likert("ANX_5", "I replay conversations looking for signs of rejection.", Anxiety),
        Question::likert("ANX_6", "I rarely worry about being abandoned.", Anxiety).reversed(),
        Question::likert("ANX_7", "I feel secure even when we spend time apart.", Anxiety).reversed(),
        Question::likert("ANX_8", "A missed call doesn't change how I feel about us.", Anxiety).reversed(),
        Question::likert("AVO_1", "I prefer not to show others how I feel deep down.", Avoidance),
        Question::likert("AVO_2", "I get uncomfortable when someone wants to be very close.", Avoidance),
        Question::likert("AVO_3", "I would rather handle problems alone than lean on a partner.", Avoidance).weighted(1.2),
        Question::likert("AVO_4", "I pull back when a relationship starts to feel serious.", Avoidance),
        Question::likert("AVO_5", "Talking about feelings makes me want to change the subject.", Avoidance),
        Question::likert("AVO_6", "It's easy for me to depend on people I trust.", Avoidance).reversed(),
        Question::likert("AVO_7", "I am comfortable sharing my private thoughts with a partner.", Avoidance).reversed(),
        Question::likert("AVO_8", "I turn to my partner when something is bothering me.", Avoidance).reversed(),
        Question::likert(
            super::ATTENTION_CHECK_ID,
            "To show you are reading carefully, please select \"Agree\".",
            Dimension::None,
        )
        .attention_check(),
        Question::likert("SD1", "I have never been jealous, not even for a moment.", Dimension::None)
            .social_desirability(),
        Question::likert("SD2", "I always respond calmly, no matter what is said to me.", Dimension::None)
            .social_desirability(),
        Question::likert(
            "PARADOX_1",
            "I want to be close to someone, but closeness also makes me want to run.",
            Dimension::None,
        ),
    ]
}

fn scenario_items() -> Vec<Question> {
    vec![
        Question::likert("SCN_ANX_1", "Your partner goes quiet at dinner. You start wondering what you did wrong.", Anxiety),
        Question::likert("SCN_ANX_2", "A friend cancels plans last minute. You read it as a sign they are pulling away.", Anxiety),
        Question::likert("SCN_ANX_3", "You send a long message and get a one-word reply. You feel the urge to follow up right away.", Anxiety),
        Question::likert("SCN_AVO_1", "Your partner asks how you are really feeling. You keep it short and move on.", Avoidance),
        Question::likert("SCN_AVO_2", "Someone you're dating suggests a weekend away together. You feel crowded.", Avoidance),
        Question::likert("SCN_AVO_3", "After an argument you would rather go quiet for a day than talk it through.", Avoidance),
        Question::likert("SCN_SEC_1", "Your partner is busy all week. You trust things between you are fine.", Anxiety).reversed(),
        Question::likert("SCN_SEC_2", "A text goes unanswered for hours. You assume they're just busy.", Anxiety).reversed(),
        Question::likert("SCN_SEC_3", "When you are stressed, you tell your partner and ask for support.", Avoidance).reversed(),
        Question::likert("SCN_SEC_4", "A partner wants to talk about the future. You're glad to join in.", Avoidance).reversed(),
        Question::likert(
            "SCN_PARADOX_1",
            "When someone gets close you feel relieved and trapped at the same time.",
            Dimension::None,
        ),
        Question::likert(
            "SCN_PARADOX_2",
            "You chase reassurance, then push it away once you have it.",
            Dimension::None,
        ),
    ]
}

fn goal_items() -> Vec<Question> {
    vec![
        Question::goal(
            "GOAL_PRIMARY",
            "What would you most like help with?",
            vec![
                AnswerOption::routed("Co-parenting communication", 1, "coparenting_support"),
                AnswerOption::routed("Setting clearer boundaries", 2, "boundary_forward"),
                AnswerOption::routed("Dating and new relationships", 3, "dating_sensitive"),
                AnswerOption::routed("Calming down conflicts", 4, "deescalator"),
                AnswerOption::routed("Feeling more understood", 5, "empathetic_mirror"),
            ],
        ),
        Question::goal(
            "GOAL_CONTEXT",
            "Who do you message most when things get hard?",
            vec![
                AnswerOption::routed("My partner", 1, "balanced"),
                AnswerOption::routed("An ex or co-parent", 2, "coparenting_support"),
                AnswerOption::routed("Someone I'm dating", 3, "dating_sensitive"),
                AnswerOption::routed("Family", 4, "balanced"),
                AnswerOption::new("Friends or coworkers", 5),
            ],
        ),
        // Four options: an answer of 5 resolves positionally to the last one.
        Question::goal(
            "GOAL_STYLE",
            "How do you want your messages to come across?",
            vec![
                AnswerOption::routed("Straight to the point", 1, "style_direct"),
                AnswerOption::routed("Warm and gentle", 2, "style_gentle"),
                AnswerOption::routed("Whatever keeps things calm", 3, "style_calming"),
                AnswerOption::routed("Light and playful", 4, "style_playful"),
            ],
        ),
    ]
}
