//! Prompt Composer — assembles the instruction text sent to the model.

use crate::myths::models::{MythRecord, NutritionRecord};
use crate::reply::prompts::{
    NO_MATCH_CONTEXT, PROMPT_TEMPLATE, RULES_BULLETS, RULES_PROSE, SYSTEM_FRAMING,
};
use crate::reply::style::{select_style, ReplyFormat};

/// Builds the full prompt for one query.
///
/// Infallible by contract: absent myth fields and partial nutrition data
/// render as empty segments, never errors.
pub fn build_prompt(
    query: &str,
    myth: Option<&MythRecord>,
    tone: &str,
    format: ReplyFormat,
    animal_nutrition: Option<&NutritionRecord>,
    plant_nutrition: Option<&NutritionRecord>,
) -> String {
    let style = select_style(query, tone);

    let context = match myth {
        Some(m) => format!(
            "Myth: {}\nTruth: {}\nAdvice: {}\n",
            m.myth,
            m.truth,
            m.advice.as_deref().unwrap_or_default()
        ),
        None => NO_MATCH_CONTEXT.to_string(),
    };

    let rules = match format {
        ReplyFormat::Prose => RULES_PROSE,
        ReplyFormat::Bullets => RULES_BULLETS,
    };

    // {rules} carries the {closer} placeholder, so it must be filled first.
    PROMPT_TEMPLATE
        .replace("{system}", SYSTEM_FRAMING)
        .replace("{style}", style.style_instruction)
        .replace("{opener}", style.opener)
        .replace("{query}", query)
        .replace("{context}", &context)
        .replace("{nutrition}", &nutrition_block(animal_nutrition, plant_nutrition))
        .replace("{rules}", rules)
        .replace("{closer}", style.closer)
        .trim()
        .to_string()
}

/// Emitted only when BOTH records are present; partial data is silently
/// omitted rather than treated as an error.
fn nutrition_block(
    animal: Option<&NutritionRecord>,
    plant: Option<&NutritionRecord>,
) -> String {
    match (animal, plant) {
        (Some(a), Some(p)) => format!(
            "\nNutrition Comparison:\n\
             - Animal Product: {} — {} g protein, {} calories\n\
             - Plant Alternative: {} — {} g protein, {} calories\n\
             \n\
             Please suggest the approximate quantity of the plant alternative needed to \
             match the protein content of the animal product.\n",
            a.food, a.protein_g, a.calories, p.food, p.protein_g, p.calories
        ),
        _ => String::new(),
    }
}
