use std::collections::BTreeMap;

use crate::models::{
    CloResult, CourseDescriptor, CourseLearningOutcome, OverallScores, PloResult,
    ProgramLearningOutcome, YearLearningOutcome, YloResult,
};
use crate::reference;

/// Completed multi-level assessment of one slide deck against one course.
#[derive(Debug, Clone)]
pub struct Assessment {
    pub clo_results: BTreeMap<String, CloResult>,
    pub plo_results: BTreeMap<String, PloResult>,
    pub ylo_results: BTreeMap<String, YloResult>,
    pub overall_scores: OverallScores,
}

impl Assessment {
    pub fn empty() -> Self {
        Assessment {
            clo_results: BTreeMap::new(),
            plo_results: BTreeMap::new(),
            ylo_results: BTreeMap::new(),
            overall_scores: OverallScores {
                clo_average: 0.0,
                plo_average: 0.0,
                ylo_average: 0.0,
            },
        }
    }
}

/// Lowercases, strips ASCII punctuation and collapses whitespace. Thai
/// characters, including combining vowel and tone marks, pass through
/// untouched so substring matching stays byte-exact.
pub fn normalize_text(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii() && !c.is_ascii_alphanumeric() && !c.is_ascii_whitespace() {
                ' '
            } else {
                c
            }
        })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keyword-coverage score for a single CLO. Substring containment only,
/// no tokenization or stemming; always returns a value in [0, 100].
pub fn score_clo(
    normalized_text: &str,
    clo: &CourseLearningOutcome,
    course_description: &str,
) -> CloResult {
    if clo.keywords.is_empty() {
        return CloResult {
            score: 50.0,
            found_keywords: Vec::new(),
            total_keywords: 0,
            coverage: 0.0,
            confidence: 0.5,
        };
    }

    let found_keywords: Vec<String> = clo
        .keywords
        .iter()
        .filter(|keyword| normalized_text.contains(normalize_text(keyword).as_str()))
        .map(|keyword| keyword.to_string())
        .collect();

    let total_keywords = clo.keywords.len();
    let coverage = found_keywords.len() as f64 / total_keywords as f64;

    let description_matches = normalize_text(course_description)
        .split_whitespace()
        .filter(|word| normalized_text.contains(*word))
        .count();
    let description_bonus = (2.0 * description_matches as f64).min(10.0);

    let score = (50.0 + 40.0 * coverage + description_bonus).min(100.0);

    CloResult {
        score,
        found_keywords,
        total_keywords,
        coverage,
        confidence: 0.6 + 0.4 * coverage,
    }
}

/// How many of a CLO's keywords hit the PLO topic list. A keyword hits when
/// either string contains the other, case-insensitive.
fn topic_hits(clo: &CourseLearningOutcome, plo: &ProgramLearningOutcome) -> usize {
    clo.keywords
        .iter()
        .filter(|keyword| {
            let keyword = normalize_text(keyword);
            plo.topics.iter().any(|topic| {
                let topic = normalize_text(topic);
                keyword.contains(topic.as_str()) || topic.contains(keyword.as_str())
            })
        })
        .count()
}

/// Rolls CLO scores up into one PLO. CLOs whose keywords overlap the PLO
/// topic list are selected; when nothing overlaps, every CLO contributes.
/// Strong overlap (two or more topic hits) weighs a CLO at 1.2.
fn aggregate_plo(
    course: &CourseDescriptor,
    plo: &ProgramLearningOutcome,
    clo_results: &BTreeMap<String, CloResult>,
) -> PloResult {
    let mut selected: Vec<(&CourseLearningOutcome, f64)> = course
        .clos
        .iter()
        .filter_map(|clo| {
            let hits = topic_hits(clo, plo);
            if hits == 0 {
                None
            } else {
                let weight = if hits >= 2 { 1.2 } else { 1.0 };
                Some((clo, weight))
            }
        })
        .collect();

    if selected.is_empty() {
        selected = course.clos.iter().map(|clo| (clo, 1.0)).collect();
    }

    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;
    let mut confidence_sum = 0.0;
    let mut related_clos = Vec::new();

    for (clo, weight) in &selected {
        if let Some(result) = clo_results.get(clo.code) {
            weighted_sum += result.score * weight;
            weight_sum += weight;
            confidence_sum += result.confidence;
            related_clos.push(clo.code.to_string());
        }
    }

    if related_clos.is_empty() {
        return PloResult {
            score: 0.0,
            related_clos,
            confidence: 0.0,
        };
    }

    PloResult {
        score: weighted_sum / weight_sum,
        confidence: confidence_sum / related_clos.len() as f64,
        related_clos,
    }
}

/// Rolls PLO scores up into one YLO. Each contribution carries the YLO's
/// cognitive multiplier and the total is normalized by the weight sum.
fn aggregate_ylo(
    ylo: &YearLearningOutcome,
    plo_results: &BTreeMap<String, PloResult>,
) -> YloResult {
    let multiplier = ylo.level.multiplier();
    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;
    let mut confidence_sum = 0.0;
    let mut related_plos = Vec::new();

    for plo_code in ylo.related_plos {
        if let Some(result) = plo_results.get(*plo_code) {
            weighted_sum += result.score * multiplier;
            weight_sum += multiplier;
            confidence_sum += result.confidence;
            related_plos.push(plo_code.to_string());
        }
    }

    if related_plos.is_empty() {
        return YloResult {
            score: 0.0,
            cognitive_level: ylo.level.label().to_string(),
            year: ylo.year.to_string(),
            related_plos,
            confidence: 0.0,
        };
    }

    YloResult {
        score: weighted_sum / weight_sum,
        cognitive_level: ylo.level.label().to_string(),
        year: ylo.year.to_string(),
        confidence: confidence_sum / related_plos.len() as f64,
        related_plos,
    }
}

fn overall_scores(
    clo_results: &BTreeMap<String, CloResult>,
    plo_results: &BTreeMap<String, PloResult>,
    ylo_results: &BTreeMap<String, YloResult>,
) -> OverallScores {
    let clo_average = if clo_results.is_empty() {
        0.0
    } else {
        clo_results.values().map(|r| r.score).sum::<f64>() / clo_results.len() as f64
    };

    let mut plo_weighted = 0.0;
    let mut plo_weight_sum = 0.0;
    for (code, result) in plo_results {
        let weight = reference::find_plo(code).map(|p| p.weight).unwrap_or(1.0);
        plo_weighted += result.score * weight;
        plo_weight_sum += weight;
    }
    let plo_average = if plo_weight_sum > 0.0 {
        plo_weighted / plo_weight_sum
    } else {
        0.0
    };

    let ylo_average = if ylo_results.is_empty() {
        0.0
    } else {
        ylo_results.values().map(|r| r.score).sum::<f64>() / ylo_results.len() as f64
    };

    OverallScores {
        clo_average,
        plo_average,
        ylo_average,
    }
}

/// Full CLO→PLO→YLO assessment of slide text against one course.
pub fn assess(course: &CourseDescriptor, text: &str) -> Assessment {
    let normalized = normalize_text(text);

    let clo_results: BTreeMap<String, CloResult> = course
        .clos
        .iter()
        .map(|clo| {
            (
                clo.code.to_string(),
                score_clo(&normalized, clo, course.description),
            )
        })
        .collect();

    let plo_results: BTreeMap<String, PloResult> = course
        .plo_mappings
        .iter()
        .map(|code| {
            let result = match reference::find_plo(code) {
                Some(plo) => aggregate_plo(course, plo, &clo_results),
                None => PloResult {
                    score: 0.0,
                    related_clos: Vec::new(),
                    confidence: 0.0,
                },
            };
            (code.to_string(), result)
        })
        .collect();

    let ylo_results = aggregate_ylos(course, &plo_results);
    let overall_scores = overall_scores(&clo_results, &plo_results, &ylo_results);

    Assessment {
        clo_results,
        plo_results,
        ylo_results,
        overall_scores,
    }
}

fn aggregate_ylos(
    course: &CourseDescriptor,
    plo_results: &BTreeMap<String, PloResult>,
) -> BTreeMap<String, YloResult> {
    course
        .ylo_mappings
        .iter()
        .map(|code| {
            let result = match reference::find_ylo(code) {
                Some(ylo) => aggregate_ylo(ylo, plo_results),
                None => YloResult {
                    score: 0.0,
                    cognitive_level: String::new(),
                    year: String::new(),
                    related_plos: Vec::new(),
                    confidence: 0.0,
                },
            };
            (code.to_string(), result)
        })
        .collect()
}

/// Assessment by course code; an unknown code degrades to empty result maps.
pub fn assess_course_code(course_code: &str, text: &str) -> Assessment {
    match reference::find_course(course_code) {
        Some(course) => assess(course, text),
        None => Assessment::empty(),
    }
}

/// Replaces each PLO score with the mean of the heuristic score and the AI
/// score, then rebuilds the YLO layer and the overall figures from the
/// blended PLO scores.
pub fn blend_plo_scores(
    course: &CourseDescriptor,
    assessment: &mut Assessment,
    ai_scores: &BTreeMap<String, f64>,
) {
    for (code, result) in assessment.plo_results.iter_mut() {
        if let Some(ai_score) = ai_scores.get(code) {
            result.score = (result.score + ai_score.clamp(0.0, 100.0)) / 2.0;
        }
    }
    assessment.ylo_results = aggregate_ylos(course, &assessment.plo_results);
    assessment.overall_scores = overall_scores(
        &assessment.clo_results,
        &assessment.plo_results,
        &assessment.ylo_results,
    );
}

/// Threshold-driven Thai recommendations derived from the weakest outcomes.
pub fn recommendations(course: &CourseDescriptor, assessment: &Assessment) -> Vec<String> {
    let mut output = Vec::new();

    let weakest_clo = assessment
        .clo_results
        .iter()
        .min_by(|a, b| a.1.score.total_cmp(&b.1.score));

    if let Some((code, result)) = weakest_clo {
        if result.score < 70.0 {
            let missing: Vec<&str> = course
                .clos
                .iter()
                .find(|clo| clo.code == code.as_str())
                .map(|clo| {
                    clo.keywords
                        .iter()
                        .filter(|k| !result.found_keywords.iter().any(|f| f == *k))
                        .copied()
                        .collect()
                })
                .unwrap_or_default();
            output.push(format!(
                "ควรเพิ่มเนื้อหาที่สอดคล้องกับ {} โดยเน้นคำสำคัญ: {}",
                code,
                missing.join(", ")
            ));
        }
    }

    for (code, result) in &assessment.plo_results {
        if result.score >= 75.0 {
            continue;
        }
        let suggestion = match code.as_str() {
            "PLO1" => "ควรเชื่อมโยงเนื้อหากับการมีส่วนร่วมของชุมชนและเป้าหมาย SDGs ให้ชัดเจนขึ้น",
            "PLO2" => "ควรเพิ่มการบูรณาการข้ามศาสตร์และรายละเอียดระเบียบวิธีวิจัย",
            "PLO3" => "ควรเพิ่มภาพ แผนภูมิ และ infographic เพื่อช่วยการสื่อสารเนื้อหา",
            _ => continue,
        };
        output.push(suggestion.to_string());
    }

    if assessment.overall_scores.plo_average >= 80.0 {
        output.push("เนื้อหาโดยรวมสอดคล้องกับผลการเรียนรู้ ควรเพิ่ม case study จากบริบทท้องถิ่น".to_string());
    }

    output.push("อ้างอิงงานวิจัยที่ทันสมัย (ภายใน 3 ปี) เพื่อเพิ่มความน่าเชื่อถือของเนื้อหา".to_string());
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CognitiveLevel;

    fn water_course() -> &'static CourseDescriptor {
        reference::find_course("282712").unwrap()
    }

    #[test]
    fn normalization_strips_punctuation_and_collapses_whitespace() {
        assert_eq!(normalize_text("GIS,  ระบบ!!  น้ำ"), "gis ระบบ น้ำ");
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn empty_keyword_list_scores_flat_fifty() {
        let clo = CourseLearningOutcome {
            code: "CLO9",
            text: "ไม่มีคำสำคัญ",
            keywords: &[],
        };
        let result = score_clo("เนื้อหาอะไรก็ได้", &clo, "");
        assert_eq!(result.score, 50.0);
        let result = score_clo("", &clo, "");
        assert_eq!(result.score, 50.0);
    }

    #[test]
    fn score_stays_within_bounds() {
        let course = water_course();
        let long_text = course.description.repeat(5);
        for text in ["", "น้ำ", long_text.as_str()] {
            let normalized = normalize_text(text);
            for clo in course.clos {
                let result = score_clo(&normalized, clo, course.description);
                assert!(result.score >= 0.0 && result.score <= 100.0);
            }
        }
    }

    #[test]
    fn score_is_monotone_in_found_keywords() {
        let clo = &water_course().clos[0];
        let texts = [
            "เนื้อหาทั่วไป",
            "เนื้อหาเรื่องทรัพยากรน้ำ",
            "เนื้อหาเรื่องทรัพยากรน้ำ และปัญหา",
            "ทรัพยากรน้ำ สถานการณ์ ปัญหา",
        ];
        let mut previous = -1.0;
        for text in texts {
            let result = score_clo(&normalize_text(text), clo, "");
            assert!(result.score >= previous, "score dropped at {text:?}");
            previous = result.score;
        }
    }

    #[test]
    fn water_resource_example_matches_expected_coverage() {
        // Two of three CLO1 keywords present, the third absent.
        let text = "สไลด์นี้กล่าวถึงทรัพยากรน้ำ และปัญหา ที่พบในลุ่มน้ำ";
        let clo = &water_course().clos[0];
        let result = score_clo(&normalize_text(text), clo, "");
        assert!((result.coverage - 2.0 / 3.0).abs() < 0.001);
        assert!(result.score >= 50.0 + 40.0 * (2.0 / 3.0) - 0.001);
        assert!(result.score <= 100.0);
        assert_eq!(result.found_keywords, vec!["ทรัพยากรน้ำ", "ปัญหา"]);
    }

    #[test]
    fn unknown_course_degrades_to_empty_maps() {
        let assessment = assess_course_code("999999", "เนื้อหา");
        assert!(assessment.clo_results.is_empty());
        assert!(assessment.plo_results.is_empty());
        assert!(assessment.ylo_results.is_empty());
        assert_eq!(assessment.overall_scores.clo_average, 0.0);
    }

    #[test]
    fn plo_score_is_mean_of_related_clos_at_uniform_weight() {
        let course = water_course();
        let assessment = assess(course, "ทรัพยากรน้ำ คุณภาพน้ำ เทคโนโลยี ชุมชน");

        for (code, plo_result) in &assessment.plo_results {
            let plo = reference::find_plo(code).unwrap();
            let uniform = course
                .clos
                .iter()
                .all(|clo| topic_hits(clo, plo) < 2 || !plo_result.related_clos.contains(&clo.code.to_string()));
            if !uniform {
                continue;
            }
            let mean: f64 = plo_result
                .related_clos
                .iter()
                .map(|c| assessment.clo_results[c].score)
                .sum::<f64>()
                / plo_result.related_clos.len() as f64;
            assert!((plo_result.score - mean).abs() < 0.001);
        }
    }

    #[test]
    fn strongly_overlapping_clo_weighs_more() {
        // CLO4 of 282712 hits both ชุมชน and ยั่งยืน in the PLO1 topics.
        let course = water_course();
        let plo1 = reference::find_plo("PLO1").unwrap();
        assert!(topic_hits(&course.clos[3], plo1) >= 2);
    }

    #[test]
    fn ylo_score_with_uniform_multiplier_is_plain_plo_mean() {
        let course = water_course();
        let assessment = assess(course, "ทรัพยากรน้ำ ปัญหา วิเคราะห์ เทคโนโลยี");

        for (code, ylo_result) in &assessment.ylo_results {
            let ylo = reference::find_ylo(code).unwrap();
            // One YLO carries one cognitive level, so the multiplier is
            // uniform across its contributions and cancels out.
            let mean: f64 = ylo_result
                .related_plos
                .iter()
                .map(|c| assessment.plo_results[c].score)
                .sum::<f64>()
                / ylo_result.related_plos.len() as f64;
            assert!((ylo_result.score - mean).abs() < 0.001);
            assert_eq!(ylo_result.cognitive_level, ylo.level.label());
        }
    }

    #[test]
    fn cognitive_multipliers_follow_bloom_ordering() {
        assert_eq!(CognitiveLevel::Understanding.multiplier(), 1.0);
        assert_eq!(CognitiveLevel::Applying.multiplier(), 1.1);
        assert_eq!(CognitiveLevel::Evaluating.multiplier(), 1.2);
        assert_eq!(CognitiveLevel::Creating.multiplier(), 1.3);
    }

    #[test]
    fn blending_moves_plo_toward_ai_score() {
        let course = water_course();
        let mut assessment = assess(course, "ทรัพยากรน้ำ ปัญหา");
        let heuristic = assessment.plo_results["PLO1"].score;

        let mut ai_scores = BTreeMap::new();
        ai_scores.insert("PLO1".to_string(), 100.0);
        blend_plo_scores(course, &mut assessment, &ai_scores);

        let blended = assessment.plo_results["PLO1"].score;
        assert!((blended - (heuristic + 100.0) / 2.0).abs() < 0.001);
    }

    #[test]
    fn recommendations_are_never_empty() {
        let course = water_course();
        let assessment = assess(course, "");
        let recs = recommendations(course, &assessment);
        assert!(!recs.is_empty());
    }
}
