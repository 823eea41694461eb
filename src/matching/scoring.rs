use crate::core::pathology::PathologyDefinition;
use crate::core::vector::SymptomVector;

/// Safely convert usize to f64 for percentage calculations
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Percentage of a pathology's criteria satisfied by the vector (0-100).
///
/// A zero-criteria pathology scores 0, not 100: with nothing to satisfy it
/// is never a candidate. The returned value is unrounded; rounding happens
/// only at display time via [`round_for_display`].
#[must_use]
pub fn match_percentage(definition: &PathologyDefinition, vector: &SymptomVector) -> f64 {
    let total = definition.criteria.len();
    if total == 0 {
        return 0.0;
    }

    let satisfied = definition
        .criteria
        .iter()
        .filter(|(attribute, criterion)| criterion.matches(vector.get(attribute)))
        .count();

    100.0 * count_to_f64(satisfied) / count_to_f64(total)
}

/// Round a percentage to one decimal, half away from zero.
///
/// Display only - threshold comparisons always use the unrounded value, so a
/// 49.96% score that displays as 50.0 still fails a strict >50 gate.
#[must_use]
pub fn round_for_display(percentage: f64) -> f64 {
    (percentage * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pathology::Criterion;

    fn lumbago() -> PathologyDefinition {
        PathologyDefinition::new("lumbago", "Lumbago aigu", "Blocage lombaire")
            .with_criterion("siege", Criterion::Exact("Lombaire".to_string()))
            .with_criterion("type_douleur", Criterion::Exact("mecanique".to_string()))
    }

    #[test]
    fn test_full_match_is_100() {
        let vector = SymptomVector::new()
            .with("siege", "Lombaire")
            .with("type_douleur", "mecanique");
        assert!((match_percentage(&lumbago(), &vector) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_half_match_is_50() {
        let vector = SymptomVector::new().with("siege", "Lombaire");
        assert!((match_percentage(&lumbago(), &vector) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_vector_scores_zero() {
        let vector = SymptomVector::new();
        assert!(match_percentage(&lumbago(), &vector).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_criteria_scores_zero_not_100() {
        let definition = PathologyDefinition::new("vide", "Vide", "");
        let vector = SymptomVector::new().with("siege", "Lombaire");
        assert!(match_percentage(&definition, &vector).abs() < f64::EPSILON);
    }

    #[test]
    fn test_one_of_criterion_counts_membership() {
        let definition = PathologyDefinition::new("p", "P", "").with_criterion(
            "calmee_par",
            Criterion::OneOf(vec!["repos".to_string(), "chaleur".to_string()]),
        );
        let hit = SymptomVector::new().with("calmee_par", "chaleur");
        let miss = SymptomVector::new().with("calmee_par", "mouvement");
        assert!((match_percentage(&definition, &hit) - 100.0).abs() < f64::EPSILON);
        assert!(match_percentage(&definition, &miss).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_for_display() {
        assert!((round_for_display(66.666_666) - 66.7).abs() < f64::EPSILON);
        assert!((round_for_display(49.96) - 50.0).abs() < f64::EPSILON);
        assert!((round_for_display(100.0) - 100.0).abs() < f64::EPSILON);
    }
}
