use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use blob_core::{
    Blob, BlobConfig, BlobDriver, FrameInput, InputSender, InstantClock, MotionSampler,
    PathCommand, RecordingSurface, REACTIVE_POLL_INTERVAL_MS,
};
use glam::DVec2;

// Simulation script, in frames at ~60 fps
const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);
const TOTAL_FRAMES: u64 = 600;
const CUE_EXPANSION_AT: u64 = 120;
const RESIZE_AT: u64 = 240;
const CUE_COLLAPSE_AT: u64 = 360;
const REPORT_EVERY: u64 = 60;

// Synthetic pointer: wanders for a while, then rests
const POINTER_ACTIVE_FOR: Duration = Duration::from_secs(3);
const POINTER_AMPLITUDE: f64 = 240.0;

const INITIAL_VIEWPORT: (f64, f64) = (1280.0, 720.0);
const RESIZED_VIEWPORT: (f64, f64) = (1600.0, 900.0);

/// Lissajous pointer path in screen pixels at time `t` seconds.
fn pointer_at(t: f64) -> DVec2 {
    DVec2::new(
        640.0 + POINTER_AMPLITUDE * (t * 1.3).sin(),
        360.0 + POINTER_AMPLITUDE * 0.6 * (t * 2.1).cos(),
    )
}

// Runs on its own thread, polling at the reactive interval like the browser's
// setInterval hook does.
fn spawn_pointer_producer(tx: InputSender, running: Arc<AtomicBool>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut sampler = MotionSampler::default();
        let interval = Duration::from_secs_f64(REACTIVE_POLL_INTERVAL_MS / 1000.0);
        let start = Instant::now();
        let mut resting_at = None;
        while running.load(Ordering::Relaxed) {
            let elapsed = start.elapsed();
            let t = if elapsed < POINTER_ACTIVE_FOR {
                elapsed.as_secs_f64()
            } else {
                *resting_at.get_or_insert(elapsed.as_secs_f64())
            };
            sampler.record(pointer_at(t));
            if let Some(speed) = sampler.poll() {
                if tx.send(FrameInput::Motion(speed)).is_err() {
                    break;
                }
            }
            thread::sleep(interval);
        }
        log::debug!("[pointer] producer stopped");
    })
}

fn report(frame: u64, driver: &BlobDriver<RecordingSurface, InstantClock>, commands: usize) {
    let blob = driver.blob();
    log::info!(
        "[frame {:>4}] shape={} energy={} radius_offset={:.1} theta_delta={:.4} commands={}",
        frame,
        blob.shape_state(),
        blob.energy_state(),
        blob.radius_offset(),
        blob.theta_delta(),
        commands
    );
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (w, h) = INITIAL_VIEWPORT;
    let blob = Blob::new(
        BlobConfig::default(),
        RecordingSurface::new(w, h),
        InstantClock::new(),
    )?;
    let mut driver = BlobDriver::new(blob);
    let tx = driver.sender();

    let running = Arc::new(AtomicBool::new(true));
    let pointer = spawn_pointer_producer(driver.sender(), Arc::clone(&running));

    for frame in 0..TOTAL_FRAMES {
        let frame_start = Instant::now();

        match frame {
            CUE_EXPANSION_AT => tx.send(FrameInput::CueExpansion)?,
            CUE_COLLAPSE_AT => tx.send(FrameInput::CueCollapse)?,
            RESIZE_AT => {
                let (w, h) = RESIZED_VIEWPORT;
                driver.blob_mut().surface_mut().set_viewport(w, h);
                // a short burst, as a window drag would produce
                for _ in 0..5 {
                    tx.send(FrameInput::Resize { viewport_width: w })?;
                }
            }
            _ => {}
        }

        let frame_report = driver.frame()?;
        if frame_report.resized {
            log::info!("[frame {:>4}] viewport resize committed", frame);
        }

        let commands = driver.blob_mut().surface_mut().take_commands();
        if frame % REPORT_EVERY == 0 {
            let drawn = commands
                .iter()
                .filter(|c| !matches!(c, PathCommand::Clear))
                .count();
            report(frame, &driver, drawn);
        }

        if let Some(rest) = FRAME_INTERVAL.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }

    running.store(false, Ordering::Relaxed);
    if pointer.join().is_err() {
        log::error!("[pointer] producer panicked");
    }
    log::info!("done after {} frames", driver.frames());
    Ok(())
}
