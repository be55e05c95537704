//! Narrative conclusions
//!
//! Phrases each finding of a report as a short Spanish-language block. The
//! per-metric blocks name whichever position won; the explanatory sentences
//! and the general conclusion are fixed editorial content that always argue
//! for the vertical position.

use birthforce_core::{ComparativeReport, Finding, GeneralConclusion, Metric, MetricComparison};
use serde::Serialize;

use crate::format;

/// One rendered conclusion block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conclusion {
    /// Heading
    pub title: &'static str,
    /// Body paragraphs, in order
    pub paragraphs: Vec<String>,
    /// Bullet items shown after the first paragraph
    pub items: Vec<String>,
    /// Closing remark after the bullets
    pub closing: Option<&'static str>,
    /// Whether the block is emphasised
    pub highlight: bool,
}

/// Phrase every finding of a report
pub fn conclusions(report: &ComparativeReport) -> Vec<Conclusion> {
    report.findings().iter().map(conclusion).collect()
}

/// Phrase a single finding
pub fn conclusion(finding: &Finding) -> Conclusion {
    match finding {
        Finding::Comparison(cmp) => match cmp.metric {
            Metric::Work => work(cmp),
            Metric::HydrostaticPressure => hydrostatic(cmp),
            Metric::TotalPressure => total(cmp),
        },
        Finding::General(general) => general_conclusion(general),
    }
}

fn work(cmp: &MetricComparison) -> Conclusion {
    Conclusion {
        title: "Trabajo Mecánico Útil",
        paragraphs: vec![
            format!("La posición {} genera mayor trabajo mecánico útil.", cmp.winner),
            format!(
                "La posición vertical produce {} de trabajo, mientras que la posición supina produce {}.",
                format::work(cmp.vertical),
                format::work(cmp.supine)
            ),
            format!(
                "Esto representa una diferencia del {} a favor de la posición vertical, \
                 ya que la gravedad contribuye directamente al descenso fetal.",
                format::percent(cmp.percent_difference)
            ),
        ],
        items: Vec::new(),
        closing: None,
        highlight: true,
    }
}

fn hydrostatic(cmp: &MetricComparison) -> Conclusion {
    Conclusion {
        title: "Presión Hidrostática Efectiva",
        paragraphs: vec![
            format!("La posición {} produce mayor presión hidrostática.", cmp.winner),
            format!(
                "La presión en posición vertical es de {}, comparado con {} en posición supina.",
                format::mmhg(cmp.vertical),
                format::mmhg(cmp.supine)
            ),
            format!(
                "La diferencia es del {}, lo que indica que la columna de líquido amniótico \
                 ejerce mayor presión en posición vertical, facilitando el descenso.",
                format::percent(cmp.percent_difference)
            ),
        ],
        items: Vec::new(),
        closing: None,
        highlight: false,
    }
}

fn total(cmp: &MetricComparison) -> Conclusion {
    Conclusion {
        title: "Presión Total Efectiva",
        paragraphs: vec![
            format!("La posición {} genera mayor presión total efectiva.", cmp.winner),
            "Combinando presión uterina y presión hidrostática:".to_string(),
        ],
        items: vec![
            format!("Vertical: {}", format::mmhg(cmp.vertical)),
            format!("Supina: {}", format::mmhg(cmp.supine)),
        ],
        closing: Some("La presión adicional en posición vertical favorece el progreso del trabajo de parto."),
        highlight: true,
    }
}

fn general_conclusion(general: &GeneralConclusion) -> Conclusion {
    Conclusion {
        title: "Conclusión General",
        paragraphs: vec![format!(
            "Basándose en los principios físicos analizados, la posición {} presenta ventajas significativas:",
            general.favored
        )],
        items: general.advantages.iter().map(|metric| advantage(*metric).to_string()).collect(),
        closing: Some(
            "Estos resultados respaldan el uso de posiciones verticales durante el trabajo de parto \
             desde una perspectiva física.",
        ),
        highlight: true,
    }
}

fn advantage(metric: Metric) -> &'static str {
    match metric {
        Metric::Work => "Mayor trabajo mecánico útil (aprovecha la gravedad)",
        Metric::HydrostaticPressure => "Mayor presión hidrostática efectiva",
        Metric::TotalPressure => "Mayor presión total que contribuye al descenso",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use birthforce_core::{compute_comparison, MeasurementSet, Position};

    #[test]
    fn four_blocks_for_defaults() {
        let blocks = conclusions(&compute_comparison(&MeasurementSet::default()));
        let titles: Vec<&str> = blocks.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            ["Trabajo Mecánico Útil", "Presión Hidrostática Efectiva", "Presión Total Efectiva", "Conclusión General"]
        );
    }

    #[test]
    fn work_block_reports_values_and_difference() {
        let blocks = conclusions(&compute_comparison(&MeasurementSet::default()));
        let work = &blocks[0];
        assert_eq!(work.paragraphs[0], "La posición vertical genera mayor trabajo mecánico útil.");
        assert!(work.paragraphs[1].contains("5.1450 J"));
        assert!(work.paragraphs[1].contains("0.0000 J"));
        assert!(work.paragraphs[2].contains("100.0%"));
    }

    #[test]
    fn tie_names_supine() {
        let tied = MetricComparison::new(Metric::TotalPressure, 60.0, 60.0);
        let block = conclusion(&Finding::Comparison(tied));
        assert_eq!(block.paragraphs[0], "La posición supina genera mayor presión total efectiva.");
        assert_eq!(tied.winner, Position::Supine);
    }

    #[test]
    fn general_block_lists_fixed_advantages() {
        let block = conclusion(&Finding::General(GeneralConclusion::VERTICAL));
        assert!(block.paragraphs[0].contains("posición vertical"));
        assert_eq!(block.items.len(), 3);
        assert!(block.closing.is_some());
    }
}
