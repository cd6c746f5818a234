//! Plain-text simulation report

use super::EvaluationSnapshot;
use std::fmt;

/// Shown when every question was recognized
pub const NO_UNRECOGNIZED_MESSAGE: &str = "Nenhuma pergunta não reconhecida. Ótimo trabalho! 🎉";

/// Operator-facing rendering of an [`EvaluationSnapshot`]
pub struct SimulationReport<'a> {
    snapshot: &'a EvaluationSnapshot,
}

impl<'a> SimulationReport<'a> {
    pub fn new(snapshot: &'a EvaluationSnapshot) -> Self {
        Self { snapshot }
    }

    /// Success rate as shown to the operator, e.g. `50.0%`
    pub fn success_rate_label(&self) -> String {
        format!("{:.1}%", self.snapshot.success_percentage())
    }
}

impl fmt::Display for SimulationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.snapshot;

        writeln!(f, "Relatório de Simulação")?;
        writeln!(f, "━━━━━━━━━━━━━━━━━━━━━━")?;
        writeln!(f, "  Interações Totais: {}", s.total_bot_turns)?;
        writeln!(f, "  Taxa de Acerto:    {}", self.success_rate_label())?;
        writeln!(
            f,
            "  Feedback:          👍 {}  👎 {}  sem resposta {}",
            s.feedback.helpful, s.feedback.not_helpful, s.feedback.unset
        )?;
        writeln!(f)?;
        writeln!(f, "Perguntas Não Reconhecidas")?;

        if s.unrecognized_questions.is_empty() {
            writeln!(f, "  {}", NO_UNRECOGNIZED_MESSAGE)?;
        } else {
            for question in &s.unrecognized_questions {
                writeln!(f, "  • {}", question)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        let snapshot = EvaluationSnapshot::default();
        let report = SimulationReport::new(&snapshot);
        assert_eq!(report.success_rate_label(), "0.0%");

        let text = report.to_string();
        assert!(text.contains("Interações Totais: 0"));
        assert!(text.contains(NO_UNRECOGNIZED_MESSAGE));
    }

    #[test]
    fn test_report_lists_unrecognized_questions() {
        let snapshot = EvaluationSnapshot {
            total_bot_turns: 3,
            grounded_count: 2,
            fallback_count: 1,
            success_rate: 2.0 / 3.0,
            unrecognized_questions: vec!["Tem estacionamento?".to_string()],
            ..Default::default()
        };
        let report = SimulationReport::new(&snapshot);

        assert_eq!(report.success_rate_label(), "66.7%");
        let text = report.to_string();
        assert!(text.contains("  • Tem estacionamento?"));
        assert!(!text.contains(NO_UNRECOGNIZED_MESSAGE));
    }
}
