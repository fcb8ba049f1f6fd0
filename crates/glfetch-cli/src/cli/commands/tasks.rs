//! `glfetch tasks` – list configured tasks.

use glfetch_core::config::GlfetchConfig;

pub fn run_list_tasks(cfg: &GlfetchConfig) {
    if cfg.tasks.is_empty() {
        println!("No tasks configured.");
        return;
    }
    println!("{:<24} {:<40} {}", "NAME", "SOURCE", "OUTPUT");
    for t in &cfg.tasks {
        let source = format!("{}:{}@{}", t.project_id, t.file_path, t.branch);
        println!("{:<24} {:<40} {}", t.name, source, t.output.display());
    }
}
