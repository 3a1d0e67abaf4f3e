use std::fs;
use std::path::Path;

use anyhow::Context;
use reel_core::{
    seed_processing_jobs, summarize, top_by_views, IncomingFile, LibraryState, QueueState,
    Settings,
};
use reel_engine::{SimEvent, SimulatorHandle, TickSettings};
use reel_logging::{reel_info, reel_warn};
use serde::Serialize;

use crate::cli::Command;
use crate::{config, render};

pub(crate) fn run(command: Command, settings: &Settings) -> anyhow::Result<()> {
    match command {
        Command::Queue { ticks, json } => {
            let profile = settings.simulation.processing_profile()?;
            let state = QueueState::from_jobs(profile, seed_processing_jobs())?;
            let tick_settings = TickSettings {
                stop_when_settled: true,
                ..TickSettings::processing(&settings.simulation)
            };
            let handle = SimulatorHandle::spawn(state, tick_settings)?;
            watch(handle, ticks, json, Notice::Processing)
        }
        Command::Upload { files, json } => {
            let incoming: Vec<IncomingFile> = files.iter().map(|path| incoming_file(path)).collect();
            let profile = settings.simulation.upload_profile()?;
            let handle = SimulatorHandle::spawn(
                QueueState::new(profile),
                TickSettings::upload(&settings.simulation),
            )?;
            handle.add_files(incoming)?;
            watch(handle, None, json, Notice::Upload)
        }
        Command::Library {
            query,
            category,
            json,
        } => {
            let mut library = LibraryState::default();
            library.set_query(query);
            library.select(category);
            let view = library.view();
            if json {
                print_json(&view)
            } else {
                print_lines(render::render_library(&view));
                Ok(())
            }
        }
        Command::Analytics { top, json } => {
            let library = LibraryState::default();
            let stats = summarize(library.records());
            let ranked = top_by_views(library.records(), top);
            if json {
                #[derive(Serialize)]
                struct Report<'a> {
                    stats: &'a reel_core::CatalogStats,
                    top: Vec<&'a str>,
                }
                print_json(&Report {
                    stats: &stats,
                    top: ranked.iter().map(|record| record.title.as_str()).collect(),
                })
            } else {
                print_lines(render::render_analytics(&stats, &ranked));
                Ok(())
            }
        }
        Command::Settings => {
            print!("{}", config::settings_to_ron(settings)?);
            Ok(())
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Notice {
    Processing,
    Upload,
}

impl Notice {
    fn completed(self, filename: &str) -> String {
        match self {
            Notice::Processing => format!("Processing complete: {filename} is ready"),
            Notice::Upload => format!("Upload Complete: {filename} uploaded successfully"),
        }
    }
}

/// Prints events until the simulator stops or `max_ticks` is reached.
fn watch(
    mut handle: SimulatorHandle,
    max_ticks: Option<u64>,
    json: bool,
    notice: Notice,
) -> anyhow::Result<()> {
    while let Some(event) = handle.blocking_recv() {
        match event {
            SimEvent::Snapshot { tick, view } => {
                if json {
                    print_json(&view)?;
                } else {
                    print_lines(render::render_queue(tick, &view));
                }
                if max_ticks.is_some_and(|limit| tick >= limit) {
                    reel_info!("Tick limit {} reached", tick);
                    break;
                }
            }
            SimEvent::JobCompleted { filename, .. } => {
                if !json {
                    println!("{}", notice.completed(&filename));
                }
            }
            SimEvent::FilesRejected { names } => {
                reel_warn!(
                    "Skipped {} file(s) that are not supported videos: {}",
                    names.len(),
                    names.join(", ")
                );
            }
            SimEvent::Settled => reel_info!("All jobs settled"),
            SimEvent::Stopped { ticks } => {
                reel_info!("Simulator stopped after {} tick(s)", ticks);
                break;
            }
        }
    }
    handle.stop();
    Ok(())
}

fn incoming_file(path: &Path) -> IncomingFile {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let size = fs::metadata(path).ok().map(|meta| meta.len());
    if size.is_none() {
        reel_warn!("Could not read size of {}", path.display());
    }
    IncomingFile::new(name, size)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string(value).context("failed to serialize output")?;
    println!("{text}");
    Ok(())
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn incoming_file_reads_name_and_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranked.mp4");
        fs::File::create(&path).unwrap().write_all(&[0u8; 1536]).unwrap();

        let file = incoming_file(&path);
        assert_eq!(file.name, "ranked.mp4");
        assert_eq!(file.size_bytes, Some(1536));
    }

    #[test]
    fn missing_file_has_unknown_size() {
        let file = incoming_file(Path::new("/definitely/not/here/clip.mov"));
        assert_eq!(file.name, "clip.mov");
        assert_eq!(file.size_bytes, None);
    }

    #[test]
    fn upload_notice_matches_toast_text() {
        assert_eq!(
            Notice::Upload.completed("clip.mov"),
            "Upload Complete: clip.mov uploaded successfully"
        );
    }
}
