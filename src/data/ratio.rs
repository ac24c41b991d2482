use crate::error::{AbundanceError, AbundanceResult};

use super::model::{ElementRatioResult, TransformedRow};

// ---------------------------------------------------------------------------
// Element ratio
// ---------------------------------------------------------------------------

/// Ratio `N_top / N_bot` of two elements with its propagated error:
///
/// ```text
/// σ = sqrt((1 / A_bot)^2 * σ_top^2 + (-A_top / A_bot^2)^2 * σ_bot^2)
/// ```
///
/// Missing values of the two selected rows are taken as `0.0`. This keeps
/// the arithmetic total but the result is meaningless for an element
/// without a measurement: a missing numerator gives `0.0`, a missing
/// denominator gives an infinite or NaN ratio. Both cases are logged.
pub fn calculate_element_ratio(
    rows: &[TransformedRow],
    numerator: &str,
    denominator: &str,
) -> AbundanceResult<ElementRatioResult> {
    let top = find_element(rows, numerator)?;
    let bot = find_element(rows, denominator)?;

    let (a_top, sigma_top) = values_or_zero(top);
    let (a_bot, sigma_bot) = values_or_zero(bot);

    if a_bot == 0.0 {
        log::warn!(
            "{denominator} has a zero ratio to hydrogen; {numerator}/{denominator} is undefined"
        );
    }

    let ratio = a_top / a_bot;
    let ratio_error = ((1.0 / a_bot).powi(2) * sigma_top.powi(2)
        + (-a_top / a_bot.powi(2)).powi(2) * sigma_bot.powi(2))
    .sqrt();

    Ok(ElementRatioResult {
        label: format!("{numerator}/{denominator}"),
        ratio,
        ratio_error,
    })
}

/// Compute the ratio and print it as `"{label} = {ratio} +/- {error}"`.
pub fn report_element_ratio(
    rows: &[TransformedRow],
    numerator: &str,
    denominator: &str,
) -> AbundanceResult<ElementRatioResult> {
    let result = calculate_element_ratio(rows, numerator, denominator)?;
    println!("{result}");
    Ok(result)
}

/// The single row for `element`; zero or several matches are an error.
fn find_element<'a>(
    rows: &'a [TransformedRow],
    element: &str,
) -> AbundanceResult<&'a TransformedRow> {
    let mut matches = rows.iter().filter(|r| r.element == element);
    match (matches.next(), matches.count()) {
        (Some(row), 0) => Ok(row),
        (first, rest) => Err(AbundanceError::ElementNotFound {
            element: element.to_string(),
            matches: usize::from(first.is_some()) + rest,
        }),
    }
}

fn values_or_zero(row: &TransformedRow) -> (f64, f64) {
    let fill = |value: Option<f64>, what: &str| {
        value.unwrap_or_else(|| {
            log::warn!("{} has no {what}; using 0.0", row.element);
            0.0
        })
    };
    (
        fill(row.ratio_to_hydrogen, "ratio to hydrogen"),
        fill(row.ratio_to_hydrogen_error, "ratio error"),
    )
}
