//! REST client monitor example
//!
//! Polls a running svc-flight-tracker for a flight and renders the shared
//! progress value as a terminal progress track.

use svc_flight_tracker_client_rest::prelude::*;

fn render_track(update: &FlightUpdate) {
    const WIDTH: usize = 40;
    let filled = (update.progress.percent / 100.0 * WIDTH as f64).round() as usize;
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(WIDTH - filled));

    let code = update
        .snapshot
        .flight_iata
        .clone()
        .or_else(|| update.snapshot.flight_icao.clone())
        .unwrap_or_else(|| String::from("?"));

    println!(
        "{} [{}] {:>5.1}% (updated {})",
        code,
        bar,
        update.progress.percent,
        time_ago(update.updated_at)
    );
}

/// Example svc-flight-tracker-client-rest
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let host = std::env::var("SERVER_HOSTNAME").unwrap_or_else(|_| String::from("localhost"));
    let port = std::env::var("SERVER_PORT_REST")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let code = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("AF66"));

    let client = RestClient::new(&host, port, "flight-tracker");
    println!("Client created");
    println!(
        "NOTE: Ensure the server is running on {} or this example will fail.",
        client.get_address()
    );

    if !client.is_ready().await {
        panic!("(main) Example failed; server is not ready.");
    }

    let monitor = FlightMonitor::new();
    let mut updates = monitor.subscribe();
    let mut notices = monitor.notifier().subscribe();

    tokio::spawn(async move {
        while let Ok(notice) = notices.recv().await {
            println!("(main) NOTICE={:?}", notice);
        }
    });

    let render = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            if let Some(update) = updates.borrow().clone() {
                render_track(&update);
            }
        }
    });

    monitor.run(&client, &code).await;

    // closing the watch channel ends the render task
    drop(monitor);
    render.await?;

    Ok(())
}
