use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::{ArgGroup, Parser, Subcommand};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing_subscriber::EnvFilter;

mod ai;
mod db;
mod engine;
mod extract;
mod hash;
mod models;
mod reference;
mod report;

use models::AssessmentRecord;

#[derive(Parser)]
#[command(name = "slide-outcome-assessment")]
#[command(about = "Scores course slides against CLO/PLO/YLO learning outcomes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or upgrade the database schema
    InitDb,
    /// List the reference course table
    Courses,
    /// Analyze slide content against one course
    #[command(group(
        ArgGroup::new("input")
            .args(["file", "text"])
            .required(true)
            .multiple(false)
    ))]
    Analyze {
        #[arg(long)]
        course: String,
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long)]
        text: Option<String>,
        /// Blend heuristic PLO scores with the AI scoring strategy
        #[arg(long, default_value_t = false)]
        ai: bool,
    },
    /// List stored assessments
    History {
        #[arg(long)]
        course: Option<String>,
        #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(i64).range(1..))]
        limit: i64,
    },
    /// Aggregate interpretation analytics over stored assessments
    Analytics {
        #[arg(long)]
        course: Option<String>,
    },
    /// Export stored assessments to a CSV file
    Export {
        #[arg(long)]
        course: Option<String>,
        #[arg(long, default_value = "assessments.csv")]
        out: PathBuf,
    },
    /// Analyze slide content and write a markdown report
    #[command(group(
        ArgGroup::new("input")
            .args(["file", "text"])
            .required(true)
            .multiple(false)
    ))]
    Report {
        #[arg(long)]
        course: String,
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long)]
        text: Option<String>,
        #[arg(long, default_value_t = false)]
        ai: bool,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::InitDb => {
            let pool = require_pool().await?;
            db::init_db(&pool).await?;
            println!("Schema ready.");
        }
        Commands::Courses => {
            for course in reference::COURSES {
                println!(
                    "- {} {} ({} CLOs, PLO: {}, YLO: {})",
                    course.code,
                    course.name,
                    course.clos.len(),
                    course.plo_mappings.join("/"),
                    course.ylo_mappings.join("/")
                );
            }
        }
        Commands::Analyze {
            course,
            file,
            text,
            ai,
        } => {
            let content = resolve_content(file.as_deref(), text);
            let record = run_assessment(&course, &content, ai).await;
            print_assessment(&record);
            persist_best_effort(&record).await;
        }
        Commands::History { course, limit } => {
            let pool = require_pool().await?;
            let records = db::list(&pool, course.as_deref(), limit).await?;
            if records.is_empty() {
                println!("No stored assessments for this filter.");
                return Ok(());
            }
            for record in &records {
                println!(
                    "- {} {} ({}) {} {:.1} คะแนน",
                    record.assessment_id,
                    record.course_code,
                    record.created_at.format("%Y-%m-%d %H:%M"),
                    report::verdict(record.overall_scores.plo_average),
                    record.overall_scores.plo_average
                );
            }
        }
        Commands::Analytics { course } => {
            let pool = require_pool().await?;
            let records = db::list(&pool, course.as_deref(), ANALYTICS_SCAN_LIMIT).await?;
            if let Some(notice) = scan_cap_notice(records.len(), ANALYTICS_SCAN_LIMIT) {
                println!("{notice}");
            }
            print_analytics(&records);
        }
        Commands::Export { course, out } => {
            let pool = require_pool().await?;
            let records = db::list(&pool, course.as_deref(), EXPORT_SCAN_LIMIT).await?;
            let exported = export_csv(&records, &out)?;
            println!("Exported {exported} assessments to {}.", out.display());
            if let Some(notice) = scan_cap_notice(records.len(), EXPORT_SCAN_LIMIT) {
                println!("{notice}");
            }
        }
        Commands::Report {
            course,
            file,
            text,
            ai,
            out,
        } => {
            let content = resolve_content(file.as_deref(), text);
            let record = run_assessment(&course, &content, ai).await;
            std::fs::write(&out, report::build_report(&record))?;
            println!("Report written to {}.", out.display());
            persist_best_effort(&record).await;
        }
    }

    Ok(())
}

/// Analytics and export read a bounded window of the newest records; when
/// the window fills up the user is told older records were left out.
const ANALYTICS_SCAN_LIMIT: i64 = 500;
const EXPORT_SCAN_LIMIT: i64 = 1000;

fn scan_cap_notice(count: usize, limit: i64) -> Option<String> {
    if count as i64 >= limit {
        Some(format!(
            "หมายเหตุ: ใช้การประเมินล่าสุด {limit} รายการเท่านั้น รายการที่เก่ากว่านั้นไม่ถูกนำมารวม"
        ))
    } else {
        None
    }
}

async fn require_pool() -> anyhow::Result<PgPool> {
    let database_url = std::env::var("DATABASE_URL")
        .context("DATABASE_URL must be set to a Postgres instance")?;
    PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .context("failed to connect to Postgres")
}

/// Persistence is optional for analysis: without a reachable database the
/// results are still printed, only the save is skipped.
async fn try_pool() -> Option<PgPool> {
    match require_pool().await {
        Ok(pool) => Some(pool),
        Err(error) => {
            tracing::warn!(%error, "database unavailable, continuing without persistence");
            None
        }
    }
}

fn resolve_content(file: Option<&std::path::Path>, text: Option<String>) -> String {
    match (file, text) {
        (Some(path), _) => {
            let extracted = extract::extract_slide_text(path);
            if extracted.is_placeholder {
                println!("คำเตือน: ไม่สามารถอ่านเนื้อหาไฟล์ได้ ใช้ชื่อไฟล์ในการประเมินแทน");
            }
            extracted.content
        }
        (None, Some(text)) => text,
        // clap's ArgGroup guarantees one of the two inputs.
        (None, None) => String::new(),
    }
}

async fn run_assessment(course_code: &str, content: &str, use_ai: bool) -> AssessmentRecord {
    let course = reference::find_course(course_code);
    if course.is_none() {
        println!("ไม่พบรหัสวิชา {course_code} ในตารางอ้างอิง ผลการประเมินจะว่างเปล่า");
    }

    let mut assessment = engine::assess_course_code(course_code, content);

    if use_ai {
        if let Some(course) = course {
            let scorer = ai::select_scorer(true);
            let analysis = scorer.analyze(content).await;
            engine::blend_plo_scores(course, &mut assessment, &analysis.plo_scores());
        }
    }

    let recommendations = course
        .map(|c| engine::recommendations(c, &assessment))
        .unwrap_or_default();

    AssessmentRecord {
        assessment_id: models::new_assessment_id(Utc::now()),
        course_code: course_code.to_string(),
        content_hash: hash::content_hash(content),
        content_length: content.chars().count(),
        content_preview: content.chars().take(200).collect(),
        clo_results: assessment.clo_results,
        plo_results: assessment.plo_results,
        ylo_results: assessment.ylo_results,
        overall_scores: assessment.overall_scores,
        recommendations,
        created_at: Utc::now(),
    }
}

fn print_assessment(record: &AssessmentRecord) {
    let overall = record.overall_scores.plo_average;
    println!("รหัสการประเมิน: {}", record.assessment_id);
    println!(
        "ผลการประเมินโดยรวม: {} ({:.1} คะแนน)",
        report::verdict(overall),
        overall
    );
    println!(
        "ค่าเฉลี่ย CLO {:.1} / PLO {:.1} / YLO {:.1}",
        record.overall_scores.clo_average,
        record.overall_scores.plo_average,
        record.overall_scores.ylo_average
    );
    for (code, result) in &record.clo_results {
        println!(
            "- {}: {:.1} คะแนน (พบคำสำคัญ {}/{})",
            code,
            result.score,
            result.found_keywords.len(),
            result.total_keywords
        );
    }
    for (code, result) in &record.plo_results {
        println!("- {}: {:.1} คะแนน", code, result.score);
    }
    for (code, result) in &record.ylo_results {
        println!(
            "- {}: {:.1} คะแนน (ระดับ {})",
            code, result.score, result.cognitive_level
        );
    }
    for recommendation in &record.recommendations {
        println!("คำแนะนำ: {recommendation}");
    }
}

/// Duplicate check plus save, both best effort: a missing or failing store
/// surfaces as a warning while the in-memory results stay usable.
async fn persist_best_effort(record: &AssessmentRecord) {
    let Some(pool) = try_pool().await else {
        println!("คำเตือน: ไม่ได้บันทึกผลการประเมิน (ฐานข้อมูลไม่พร้อมใช้งาน)");
        return;
    };

    match db::find_duplicate(&pool, &record.content_hash, &record.course_code).await {
        Ok(Some(existing)) => {
            println!("คำเตือน: เนื้อหานี้เคยถูกประเมินแล้วในรหัส {existing}");
        }
        Ok(None) => {}
        Err(error) => {
            tracing::warn!(%error, "duplicate check failed");
        }
    }

    match db::save(&pool, record).await {
        Ok(()) => println!("บันทึกผลการประเมิน {} แล้ว", record.assessment_id),
        Err(error) => {
            tracing::warn!(%error, "failed to persist assessment");
            println!("คำเตือน: บันทึกผลการประเมินไม่สำเร็จ ผลลัพธ์ยังใช้งานได้ในหน้าจอนี้");
        }
    }
}

fn print_analytics(records: &[AssessmentRecord]) {
    if records.is_empty() {
        println!("No stored assessments for this filter.");
        return;
    }

    let summary = report::summarize(records);
    println!("จำนวนการประเมินทั้งหมด: {}", summary.total);
    println!("การกระจายผลการประเมิน:");
    for label in report::VERDICTS {
        let count = summary.verdict_counts.get(label).copied().unwrap_or(0);
        println!("- {label}: {count}");
    }

    let excellent = summary.verdict_counts.get("ดีเยี่ยม").copied().unwrap_or(0);
    let need_improvement = summary.verdict_counts.get("ควรปรับปรุง").copied().unwrap_or(0)
        + summary.verdict_counts.get("ต้องปรับปรุงมาก").copied().unwrap_or(0);
    println!(
        "% ที่ได้ผลดีเยี่ยม: {:.1}%",
        excellent as f64 / summary.total as f64 * 100.0
    );
    println!(
        "% ที่ต้องปรับปรุง: {:.1}%",
        need_improvement as f64 / summary.total as f64 * 100.0
    );

    println!("จุดเด่นที่พบบ่อย:");
    for (item, count) in &summary.common_strengths {
        println!("- {item} ({count} ครั้ง)");
    }
    println!("จุดอ่อนที่พบบ่อย:");
    for (item, count) in &summary.common_weaknesses {
        println!("- {item} ({count} ครั้ง)");
    }
    println!("คำแนะนำที่พบบ่อย:");
    for (item, count) in &summary.common_recommendations {
        println!("- {item} ({count} ครั้ง)");
    }
}

fn export_csv(records: &[AssessmentRecord], out: &std::path::Path) -> anyhow::Result<usize> {
    let mut writer = csv::Writer::from_path(out)?;
    writer.write_record([
        "assessment_id",
        "course_code",
        "content_hash",
        "clo_average",
        "plo_average",
        "ylo_average",
        "verdict",
        "created_at",
    ])?;

    for record in records {
        writer.write_record([
            record.assessment_id.clone(),
            record.course_code.clone(),
            record.content_hash.clone(),
            format!("{:.2}", record.overall_scores.clo_average),
            format!("{:.2}", record.overall_scores.plo_average),
            format!("{:.2}", record.overall_scores.ylo_average),
            report::verdict(record.overall_scores.plo_average).to_string(),
            record.created_at.to_rfc3339(),
        ])?;
    }

    writer.flush()?;
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_rejects_non_positive_limit() {
        let argv = ["slide-outcome-assessment", "history", "--limit", "0"];
        assert!(Cli::try_parse_from(argv).is_err());
        let argv = ["slide-outcome-assessment", "history", "--limit", "-3"];
        assert!(Cli::try_parse_from(argv).is_err());
        let argv = ["slide-outcome-assessment", "history", "--limit", "5"];
        assert!(Cli::try_parse_from(argv).is_ok());
    }

    #[test]
    fn scan_cap_notice_appears_only_when_window_fills() {
        assert!(scan_cap_notice(499, ANALYTICS_SCAN_LIMIT).is_none());
        assert!(scan_cap_notice(500, ANALYTICS_SCAN_LIMIT).is_some());
        assert!(scan_cap_notice(0, EXPORT_SCAN_LIMIT).is_none());
    }
}
