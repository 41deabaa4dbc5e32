use anyhow::Context;
use serde_json::Value;
use sqlx::{PgPool, Row};

use crate::models::AssessmentRecord;

pub async fn init_db(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Append-only insert of one finished assessment. Records are never updated
/// or deleted afterwards.
pub async fn save(pool: &PgPool, record: &AssessmentRecord) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO slide_assessment.assessments
        (assessment_id, course_code, content_hash, content_length, content_preview,
         clo_results, plo_results, ylo_results, overall_scores, recommendations, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        "#,
    )
    .bind(&record.assessment_id)
    .bind(&record.course_code)
    .bind(&record.content_hash)
    .bind(record.content_length as i64)
    .bind(&record.content_preview)
    .bind(serde_json::to_value(&record.clo_results)?)
    .bind(serde_json::to_value(&record.plo_results)?)
    .bind(serde_json::to_value(&record.ylo_results)?)
    .bind(serde_json::to_value(&record.overall_scores)?)
    .bind(serde_json::to_value(&record.recommendations)?)
    .bind(record.created_at)
    .execute(pool)
    .await
    .context("failed to insert assessment record")?;

    Ok(())
}

/// Scans already-fetched records for one sharing this content hash and
/// course code. The earliest stored assessment wins, so a re-analysis of
/// identical content is flagged as a duplicate of the first run.
pub fn first_duplicate<'a>(
    records: &'a [AssessmentRecord],
    content_hash: &str,
    course_code: &str,
) -> Option<&'a AssessmentRecord> {
    records
        .iter()
        .filter(|r| r.content_hash == content_hash && r.course_code == course_code)
        .min_by_key(|r| r.created_at)
}

/// Pre-check-then-append duplicate detection: fetches the course history and
/// scans it for a matching content hash. Racy without locking, which is
/// acceptable for single-user interactive usage.
pub async fn find_duplicate(
    pool: &PgPool,
    content_hash: &str,
    course_code: &str,
) -> anyhow::Result<Option<String>> {
    let records = list(pool, Some(course_code), i64::MAX).await?;
    Ok(first_duplicate(&records, content_hash, course_code).map(|r| r.assessment_id.clone()))
}

/// Stored assessments, newest first, optionally filtered by course. A
/// `limit` below one is clamped to one row; the CLI rejects such values
/// before they reach this layer.
pub async fn list(
    pool: &PgPool,
    course_code: Option<&str>,
    limit: i64,
) -> anyhow::Result<Vec<AssessmentRecord>> {
    let mut query = String::from(
        "SELECT assessment_id, course_code, content_hash, content_length, content_preview, \
         clo_results, plo_results, ylo_results, overall_scores, recommendations, created_at \
         FROM slide_assessment.assessments",
    );

    if course_code.is_some() {
        query.push_str(" WHERE course_code = $1 ORDER BY created_at DESC LIMIT $2");
    } else {
        query.push_str(" ORDER BY created_at DESC LIMIT $1");
    }

    let mut rows = sqlx::query(&query);
    if let Some(value) = course_code {
        rows = rows.bind(value);
    }
    rows = rows.bind(limit.max(1));

    let mut records = Vec::new();
    for row in rows.fetch_all(pool).await? {
        records.push(AssessmentRecord {
            assessment_id: row.get("assessment_id"),
            course_code: row.get("course_code"),
            content_hash: row.get("content_hash"),
            content_length: row.get::<i64, _>("content_length") as usize,
            content_preview: row.get("content_preview"),
            clo_results: serde_json::from_value(row.get::<Value, _>("clo_results"))
                .context("malformed clo_results payload")?,
            plo_results: serde_json::from_value(row.get::<Value, _>("plo_results"))
                .context("malformed plo_results payload")?,
            ylo_results: serde_json::from_value(row.get::<Value, _>("ylo_results"))
                .context("malformed ylo_results payload")?,
            overall_scores: serde_json::from_value(row.get::<Value, _>("overall_scores"))
                .context("malformed overall_scores payload")?,
            recommendations: serde_json::from_value(row.get::<Value, _>("recommendations"))
                .context("malformed recommendations payload")?,
            created_at: row.get("created_at"),
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{engine, hash, models};
    use chrono::{Duration, Utc};

    fn stored_record(course_code: &str, text: &str, minutes_ago: i64) -> AssessmentRecord {
        let assessment = engine::assess_course_code(course_code, text);
        AssessmentRecord {
            assessment_id: models::new_assessment_id(Utc::now()),
            course_code: course_code.to_string(),
            content_hash: hash::content_hash(text),
            content_length: text.chars().count(),
            content_preview: text.chars().take(200).collect(),
            clo_results: assessment.clo_results,
            plo_results: assessment.plo_results,
            ylo_results: assessment.ylo_results,
            overall_scores: assessment.overall_scores,
            recommendations: Vec::new(),
            created_at: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    #[test]
    fn identical_hash_and_course_flags_second_save_as_duplicate() {
        let first = stored_record("282712", "ทรัพยากรน้ำ สถานการณ์ ปัญหา", 10);
        let second = stored_record("282712", "ทรัพยากรน้ำ สถานการณ์ ปัญหา", 0);
        assert_eq!(first.content_hash, second.content_hash);

        // Stored newest first, the order `list` returns.
        let stored = vec![second.clone(), first.clone()];
        let found = first_duplicate(&stored, &second.content_hash, &second.course_code).unwrap();
        assert_eq!(found.assessment_id, first.assessment_id);
    }

    #[test]
    fn different_content_or_course_is_not_a_duplicate() {
        let stored = vec![stored_record("282712", "ทรัพยากรน้ำ", 5)];
        let other_hash = hash::content_hash("เนื้อหาอื่น");
        assert!(first_duplicate(&stored, &other_hash, "282712").is_none());
        assert!(first_duplicate(&stored, &stored[0].content_hash, "282701").is_none());
    }

    #[test]
    fn empty_history_has_no_duplicates() {
        assert!(first_duplicate(&[], "d41d8cd98f00b204e9800998ecf8427e", "282712").is_none());
    }
}
