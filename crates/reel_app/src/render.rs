use reel_core::{
    format_count, CatalogStats, EmptyReason, HighlightRecord, JobRowView, JobStatus,
    LibraryViewModel, QueueViewModel,
};

const BAR_WIDTH: usize = 20;

pub fn render_queue(tick: u64, view: &QueueViewModel) -> Vec<String> {
    let counts = &view.counts;
    let mut status = format!(
        "Tick {} | Jobs: {} | active {} | ready {} | failed {}",
        tick,
        view.jobs.len(),
        counts.active(),
        counts.completed,
        counts.error
    );
    if let Some(intake) = &view.last_intake {
        status.push_str(&format!(
            " | last pick: accepted {}, rejected {}",
            intake.accepted, intake.rejected
        ));
    }

    let mut lines = vec![status];
    if view.jobs.is_empty() {
        lines.push("  No videos in queue".to_string());
    }
    lines.extend(view.jobs.iter().map(format_job_row));
    lines
}

fn format_job_row(job: &JobRowView) -> String {
    let mut row = format!(
        "  [#{id}] {status:<10} {bar} {pct:>3}%  {name}",
        id = job.job_id,
        status = status_label(job.status),
        bar = progress_bar(job.progress),
        pct = job.progress.round() as u32,
        name = job.filename
    );
    if let Some(size) = &job.size_label {
        row.push_str(&format!(" ({size})"));
    }
    match (&job.failure, job.status) {
        (Some(reason), _) => row.push_str(&format!(" - {reason}")),
        (None, JobStatus::Processing) => row.push_str(&format!(" - {}", job.stage)),
        _ => {}
    }
    row
}

fn status_label(status: JobStatus) -> &'static str {
    match status {
        JobStatus::Pending => "Pending",
        JobStatus::Processing => "Processing",
        JobStatus::Completed => "Ready",
        JobStatus::Error => "Error",
    }
}

fn progress_bar(progress: f64) -> String {
    let filled = ((progress / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

pub fn render_library(view: &LibraryViewModel) -> Vec<String> {
    let mut lines = vec![format!(
        "Showing {} of {} highlights (category: {}, search: {:?})",
        view.rows.len(),
        view.total,
        view.filter,
        view.query
    )];
    match view.empty {
        Some(EmptyReason::EmptyCatalog) => lines.push("  No highlights yet".to_string()),
        Some(EmptyReason::NoMatches) => {
            lines.push("  No highlights match your search or filter".to_string())
        }
        None => {}
    }
    lines.extend(view.rows.iter().map(|row| {
        let tags: Vec<String> = row.tags.iter().map(|tag| format!("#{tag}")).collect();
        format!(
            "  {:<24} {:>5} {:<3} {:<10} {:>6} views {:>5} likes  {}  {}",
            row.title,
            row.duration,
            row.quality.as_str(),
            row.category.display_name(),
            row.views,
            row.likes,
            row.created_at,
            tags.join(" ")
        )
    }));
    lines
}

pub fn render_analytics(stats: &CatalogStats, top: &[&HighlightRecord]) -> Vec<String> {
    let mut lines = vec![
        format!("Highlights: {}", stats.highlights),
        format!("Total views: {}", format_with_commas(stats.total_views)),
        format!("Total likes: {}", format_with_commas(stats.total_likes)),
        "Content types:".to_string(),
    ];
    lines.extend(stats.categories.iter().map(|share| {
        format!(
            "  {:<10} {:>3} ({}%)",
            share.category.display_name(),
            share.count,
            share.percent
        )
    }));
    lines.push("Top highlights:".to_string());
    lines.extend(top.iter().enumerate().map(|(rank, record)| {
        format!(
            "  {}. {:<24} {:>6} views {:>5} likes",
            rank + 1,
            record.title,
            format_count(record.view_count),
            format_count(record.like_count)
        )
    }));
    lines
}

fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}
