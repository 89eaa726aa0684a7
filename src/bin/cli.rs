use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use videogen::config::settings::ClientConfig;
use videogen::modules::generation::model::{GenerationRequest, VideoStyle, VoiceOption};
use videogen::modules::lifecycle::templates::{find_template, TEMPLATES};
use videogen::modules::lifecycle::{GenerationLifecycle, ProxyClient, Studio};
use videogen::modules::project::{JsonFileStore, ProjectService, VideoProject};

#[derive(Parser)]
#[command(name = "videogen", version, about = "Generate AI videos and browse saved projects")]
struct Cli {
    /// Root URL of the generation server
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// JSON file holding saved projects
    #[arg(long, global = true)]
    projects_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a video and save it as a project
    Generate {
        #[arg(long, required_unless_present = "template")]
        script: Option<String>,
        /// Start from a template; --script replaces its placeholder text
        #[arg(long)]
        template: Option<String>,
        #[arg(long)]
        style: Option<VideoStyle>,
        #[arg(long)]
        voice: Option<VoiceOption>,
        /// Target length in seconds (15-120)
        #[arg(long, value_parser = clap::value_parser!(u32).range(15..=120))]
        duration: Option<u32>,
    },
    /// Show the dashboard of saved projects
    List,
    /// Preview one project
    Show { id: String },
    /// Delete a project
    Delete { id: String },
    /// List the available templates
    Templates,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env();
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    if let Some(projects_file) = cli.projects_file {
        config.projects_file = projects_file;
    }

    let projects = ProjectService::new(Arc::new(JsonFileStore::new(config.projects_file.clone())));

    match cli.command {
        Command::Generate {
            script,
            template,
            style,
            voice,
            duration,
        } => {
            let mut request = match template {
                Some(name) => find_template(&name)
                    .ok_or_else(|| anyhow!("Unknown template: {}", name))?
                    .to_request(),
                None => GenerationRequest::new(String::new()),
            };
            if let Some(script) = script {
                request.script = script;
            }
            if let Some(style) = style {
                request.style = style;
            }
            if let Some(voice) = voice {
                request.voice = voice;
            }
            if let Some(duration) = duration {
                request.duration = duration;
            }

            let client = ProxyClient::new(&config.api_url).context("Failed to create HTTP client")?;
            let studio = Studio::new(
                GenerationLifecycle::new(client, &config.thumbnail_base_url),
                projects,
            );

            let project = studio
                .create_video(&request, |progress| {
                    println!("[{}] {}", progress.state, progress.message)
                })
                .await
                .map_err(|e| {
                    anyhow!("An error occurred during video generation: {}. Please try again.", e)
                })?;

            println!();
            print_project(&project);
        }
        Command::List => {
            let all = projects.list()?;
            if all.is_empty() {
                println!("No projects yet. Get started by creating your first video.");
            }
            for project in all {
                println!(
                    "{}  {}  {}",
                    project.id,
                    project.created_at.date(),
                    project.title
                );
            }
        }
        Command::Show { id } => match projects.find(&id)? {
            Some(project) => print_project(&project),
            None => return Err(anyhow!("Project not found: {}", id)),
        },
        Command::Delete { id } => {
            if projects.delete(&id)? {
                println!("Deleted {}", id);
            } else {
                return Err(anyhow!("Project not found: {}", id));
            }
        }
        Command::Templates => {
            for template in TEMPLATES.iter() {
                println!(
                    "{} ({}, {})\n  {}",
                    template.name, template.style, template.voice, template.description
                );
            }
        }
    }

    Ok(())
}

fn print_project(project: &VideoProject) {
    println!("{}", project.title);
    println!("  id:        {}", project.id);
    println!("  created:   {}", project.created_at);
    println!("  style:     {}", project.style);
    println!("  voice:     {}", project.voice);
    println!("  duration:  {}s", project.duration);
    println!("  video:     {}", project.video_url);
    println!("  thumbnail: {}", project.preview_image_url());
    println!("  script:\n{}", project.script);
}
