use std::collections::BTreeMap;
use std::fmt::Write;

use crate::models::AssessmentRecord;
use crate::reference;

/// Overall verdict labels, ordered best to worst.
pub const VERDICTS: [&str; 4] = ["ดีเยี่ยม", "ดี", "ควรปรับปรุง", "ต้องปรับปรุงมาก"];

pub fn verdict(score: f64) -> &'static str {
    if score >= 80.0 {
        VERDICTS[0]
    } else if score >= 70.0 {
        VERDICTS[1]
    } else if score >= 60.0 {
        VERDICTS[2]
    } else {
        VERDICTS[3]
    }
}

/// CLO-level strengths of one assessment, as stable phrases suitable for
/// frequency counting across records.
pub fn strengths(record: &AssessmentRecord) -> Vec<String> {
    record
        .clo_results
        .iter()
        .filter(|(_, result)| result.score >= 80.0)
        .map(|(code, _)| format!("คะแนน {code} อยู่ในระดับดีเยี่ยม"))
        .collect()
}

pub fn weaknesses(record: &AssessmentRecord) -> Vec<String> {
    record
        .clo_results
        .iter()
        .filter(|(_, result)| result.score < 60.0)
        .map(|(code, _)| format!("คะแนน {code} ต่ำกว่าเกณฑ์"))
        .collect()
}

fn best_and_worst_clo(record: &AssessmentRecord) -> (Option<&String>, Option<&String>) {
    let best = record
        .clo_results
        .iter()
        .max_by(|a, b| a.1.score.total_cmp(&b.1.score))
        .map(|(code, _)| code);
    let worst = record
        .clo_results
        .iter()
        .min_by(|a, b| a.1.score.total_cmp(&b.1.score))
        .map(|(code, _)| code);
    (best, worst)
}

fn cognitive_distribution(record: &AssessmentRecord) -> BTreeMap<String, usize> {
    let mut distribution = BTreeMap::new();
    for result in record.ylo_results.values() {
        *distribution.entry(result.cognitive_level.clone()).or_insert(0) += 1;
    }
    distribution
}

/// Markdown report for a single assessment run.
pub fn build_report(record: &AssessmentRecord) -> String {
    let course_name = reference::find_course(&record.course_code)
        .map(|c| c.name)
        .unwrap_or("ไม่พบรายวิชาในตารางอ้างอิง");
    let overall = record.overall_scores.plo_average;
    let (best, worst) = best_and_worst_clo(record);

    let mut output = String::new();
    let _ = writeln!(output, "# รายงานการประเมินความสอดคล้องของสไลด์");
    let _ = writeln!(output, "รหัสการประเมิน: {}", record.assessment_id);
    let _ = writeln!(
        output,
        "รายวิชา: {} {} (ประเมินเมื่อ {})",
        record.course_code,
        course_name,
        record.created_at.format("%Y-%m-%d %H:%M")
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## ผลการประเมินโดยรวม");
    let _ = writeln!(output, "- ผลการประเมิน: {} ({:.1} คะแนน)", verdict(overall), overall);
    let _ = writeln!(
        output,
        "- ค่าเฉลี่ย CLO {:.1} / PLO {:.1} / YLO {:.1}",
        record.overall_scores.clo_average,
        record.overall_scores.plo_average,
        record.overall_scores.ylo_average
    );
    if let (Some(best), Some(worst)) = (best, worst) {
        let _ = writeln!(output, "- CLO สูงสุด: {best} / CLO ต่ำสุด: {worst}");
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## รายละเอียดระดับ CLO");
    if record.clo_results.is_empty() {
        let _ = writeln!(output, "ไม่พบข้อมูล CLO สำหรับรายวิชานี้");
    }
    for (code, result) in &record.clo_results {
        let _ = writeln!(
            output,
            "- {}: {:.1} คะแนน (พบคำสำคัญ {}/{} ความครอบคลุม {:.0}%)",
            code,
            result.score,
            result.found_keywords.len(),
            result.total_keywords,
            result.coverage * 100.0
        );
        if !result.found_keywords.is_empty() {
            let _ = writeln!(output, "  คำสำคัญที่พบ: {}", result.found_keywords.join(", "));
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## รายละเอียดระดับ PLO");
    for (code, result) in &record.plo_results {
        let _ = writeln!(
            output,
            "- {}: {:.1} คะแนน (จาก {})",
            code,
            result.score,
            result.related_clos.join(", ")
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## รายละเอียดระดับ YLO");
    for (code, result) in &record.ylo_results {
        let _ = writeln!(
            output,
            "- {}: {:.1} คะแนน ({} ระดับ {})",
            code, result.score, result.year, result.cognitive_level
        );
    }

    let distribution = cognitive_distribution(record);
    if !distribution.is_empty() {
        let _ = writeln!(output);
        let _ = writeln!(output, "## การกระจายระดับการเรียนรู้");
        for (level, count) in &distribution {
            let _ = writeln!(output, "- {level}: {count} YLO");
        }
    }

    let strengths = strengths(record);
    let weaknesses = weaknesses(record);
    let _ = writeln!(output);
    let _ = writeln!(output, "## จุดเด่น");
    if strengths.is_empty() {
        let _ = writeln!(output, "ยังไม่พบ CLO ที่อยู่ในระดับดีเยี่ยม");
    }
    for item in &strengths {
        let _ = writeln!(output, "- {item}");
    }
    let _ = writeln!(output);
    let _ = writeln!(output, "## จุดที่ควรปรับปรุง");
    if weaknesses.is_empty() {
        let _ = writeln!(output, "ไม่พบ CLO ที่ต่ำกว่าเกณฑ์");
    }
    for item in &weaknesses {
        let _ = writeln!(output, "- {item}");
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## คำแนะนำ");
    for (index, recommendation) in record.recommendations.iter().enumerate() {
        let _ = writeln!(output, "{}. {}", index + 1, recommendation);
    }

    output
}

#[derive(Debug, Clone)]
pub struct InterpretationSummary {
    pub total: usize,
    pub verdict_counts: BTreeMap<&'static str, usize>,
    pub common_strengths: Vec<(String, usize)>,
    pub common_weaknesses: Vec<(String, usize)>,
    pub common_recommendations: Vec<(String, usize)>,
}

fn top_five(counts: BTreeMap<String, usize>) -> Vec<(String, usize)> {
    let mut items: Vec<(String, usize)> = counts.into_iter().collect();
    items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    items.truncate(5);
    items
}

/// Frequency analytics across stored assessments, mirroring what the
/// interpretation history view aggregates.
pub fn summarize(records: &[AssessmentRecord]) -> InterpretationSummary {
    let mut verdict_counts: BTreeMap<&'static str, usize> =
        VERDICTS.iter().map(|label| (*label, 0)).collect();
    let mut strength_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut weakness_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut recommendation_counts: BTreeMap<String, usize> = BTreeMap::new();

    for record in records {
        let label = verdict(record.overall_scores.plo_average);
        *verdict_counts.entry(label).or_insert(0) += 1;

        for item in strengths(record) {
            *strength_counts.entry(item).or_insert(0) += 1;
        }
        for item in weaknesses(record) {
            *weakness_counts.entry(item).or_insert(0) += 1;
        }
        for item in &record.recommendations {
            *recommendation_counts.entry(item.clone()).or_insert(0) += 1;
        }
    }

    InterpretationSummary {
        total: records.len(),
        verdict_counts,
        common_strengths: top_five(strength_counts),
        common_weaknesses: top_five(weakness_counts),
        common_recommendations: top_five(recommendation_counts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine;
    use crate::models::AssessmentRecord;
    use chrono::Utc;

    fn sample_record(text: &str) -> AssessmentRecord {
        let course = reference::find_course("282712").unwrap();
        let assessment = engine::assess(course, text);
        let recommendations = engine::recommendations(course, &assessment);
        AssessmentRecord {
            assessment_id: "ASSESS-20260830-test01".to_string(),
            course_code: course.code.to_string(),
            content_hash: crate::hash::content_hash(text),
            content_length: text.chars().count(),
            content_preview: text.chars().take(200).collect(),
            clo_results: assessment.clo_results,
            plo_results: assessment.plo_results,
            ylo_results: assessment.ylo_results,
            overall_scores: assessment.overall_scores,
            recommendations,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn verdict_thresholds() {
        assert_eq!(verdict(92.0), "ดีเยี่ยม");
        assert_eq!(verdict(80.0), "ดีเยี่ยม");
        assert_eq!(verdict(75.0), "ดี");
        assert_eq!(verdict(63.0), "ควรปรับปรุง");
        assert_eq!(verdict(40.0), "ต้องปรับปรุงมาก");
    }

    #[test]
    fn report_covers_all_result_levels() {
        let record = sample_record("ทรัพยากรน้ำ สถานการณ์ ปัญหา คุณภาพน้ำ ชุมชน ยั่งยืน");
        let report = build_report(&record);
        assert!(report.contains("## รายละเอียดระดับ CLO"));
        assert!(report.contains("## รายละเอียดระดับ PLO"));
        assert!(report.contains("## รายละเอียดระดับ YLO"));
        assert!(report.contains("## คำแนะนำ"));
        assert!(report.contains("282712"));
    }

    #[test]
    fn summary_counts_every_record_once() {
        let records = vec![
            sample_record("ทรัพยากรน้ำ สถานการณ์ ปัญหา คุณภาพน้ำ มลพิษ วิเคราะห์ ชุมชน ยั่งยืน ลุ่มน้ำ เทคโนโลยี บำบัดน้ำเสีย ประยุกต์"),
            sample_record("เนื้อหาที่ไม่เกี่ยวข้อง"),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.total, 2);
        let counted: usize = summary.verdict_counts.values().sum();
        assert_eq!(counted, 2);
    }

    #[test]
    fn common_recommendations_are_ranked_by_frequency() {
        let records = vec![
            sample_record("ก"),
            sample_record("ข"),
            sample_record("ทรัพยากรน้ำ"),
        ];
        let summary = summarize(&records);
        assert!(!summary.common_recommendations.is_empty());
        for window in summary.common_recommendations.windows(2) {
            assert!(window[0].1 >= window[1].1);
        }
    }

    #[test]
    fn empty_history_summary_is_all_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.common_strengths.is_empty());
    }
}
