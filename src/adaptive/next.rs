use super::Lean;
use crate::bank::{Dimension, Question};
use crate::responses::ResponseMap;
use crate::scoring::dimension_means;

/// Pick the most diagnostic unanswered question from `pool`.
///
/// Returns `None` only when every pool item already has a response.
pub fn pick_next<'a>(responses: &ResponseMap, pool: &'a [Question], cutoff: f64) -> Option<&'a Question> {
    let unseen: Vec<&Question> = pool
        .iter()
        .filter(|q| !responses.contains_key(&q.id))
        .collect();
    let first = *unseen.first()?;

    let answered = pool.iter().filter(|q| responses.contains_key(&q.id));
    let lean = Lean::from_means(dimension_means(responses, answered, false), cutoff);

    let picked = match lean {
        Lean::Anxiety | Lean::Avoidance => {
            let target = if lean == Lean::Anxiety {
                Dimension::Anxiety
            } else {
                Dimension::Avoidance
            };
            first_where(&unseen, |q| q.dimension == target).or_else(|| first_where(&unseen, |q| q.reversed))
        }
        Lean::BothHigh => first_where(&unseen, |q| q.is_paradox())
            .or_else(|| first_where(&unseen, |q| q.dimension == Dimension::None)),
        Lean::BothLow => first_where(&unseen, |q| q.reversed),
    }
    .unwrap_or(first);

    tracing::debug!(?lean, picked = %picked.id, remaining = unseen.len(), "picked next question");
    Some(picked)
}

fn first_where<'a>(items: &[&'a Question], pred: impl Fn(&Question) -> bool) -> Option<&'a Question> {
    items.iter().copied().find(|&q| pred(q))
}
