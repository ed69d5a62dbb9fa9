pub mod calendar;
mod commands;
mod db;
pub mod error;
pub mod load;
pub mod models;
pub mod planner;
pub mod sessions;
#[cfg(test)]
mod test_utils;

use db::AppState;
use std::sync::Arc;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  tauri::Builder::default()
    .plugin(tauri_plugin_opener::init())
    .setup(|app| {
      // Initialize database
      let app_handle = app.handle().clone();
      tauri::async_runtime::block_on(async move {
        match db::initialize_db(&app_handle).await {
          Ok(pool) => {
            let state = Arc::new(AppState::new(pool));
            app_handle.manage(state);
            println!("Database ready");
          }
          Err(e) => {
            eprintln!("Failed to initialize database: {}", e);
          }
        }
      });
      Ok(())
    })
    .invoke_handler(tauri::generate_handler![
      commands::plan::generate_week_plan,
      commands::load::record_and_evaluate_load,
      commands::load::get_load_history,
    ])
    .run(tauri::generate_context!())
    .expect("error while running tauri application");
}
