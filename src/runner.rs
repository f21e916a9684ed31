use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;
use std::thread::JoinHandle;

use log::{debug, error, info, warn};
use strum_macros::Display;

use crate::engine::config::Config;
use crate::engine::frames::FrameClock;
use crate::engine::scene::Point;
use crate::engine::special_opcodes::SpecialOpcodes;
use crate::engine::{Engine, EngineSnapshot};
use crate::errors::Errors;

#[derive(Display, Debug, Clone, PartialEq)]
pub enum RunnerEvent {
    Frame { frame: u64, camera: Point },
    OpcodeDone { op: i16, name: &'static str },
    Failed { op: i16, message: String },
}

/// Runs a script of special opcodes against a fresh engine on a worker thread.
pub struct Runner {
    alive: Arc<AtomicBool>,
    events: Receiver<RunnerEvent>,

    handle: Option<JoinHandle<Result<EngineSnapshot, Errors>>>,
}

impl Runner {
    pub fn new(config: &Config) -> Runner {
        let alive = Arc::new(AtomicBool::new(true));
        let (tx, rx) = channel::<RunnerEvent>();

        let clock = FrameClock::new(config.hz, alive.clone(), tx.clone());
        let mut engine = Engine::new(config, Arc::new(Mutex::new(clock)));
        let opcodes = SpecialOpcodes::new();
        let script = config.script.clone();

        debug!("{} special opcodes registered", opcodes.implemented().count());
        for op in script.iter().filter(|op| !opcodes.is_implemented(**op)) {
            warn!("Script calls unimplemented special opcode {} ({:#X})", op, op);
        }

        let thread_alive = alive.clone();

        info!("Starting engine ...");

        let handle = thread::spawn(move || {
            for op in script {
                if !thread_alive.load(Ordering::SeqCst) {
                    break;
                }

                if let Err(err) = opcodes.run(op, &mut engine) {
                    let _ = tx.send(RunnerEvent::Failed { op, message: err.to_string() });
                    return Err(err);
                }

                if let Some(name) = opcodes.name(op) {
                    let _ = tx.send(RunnerEvent::OpcodeDone { op, name });
                }
            }

            Ok(engine.snapshot())
        });

        Runner {
            alive,
            events: rx,
            handle: Some(handle),
        }
    }

    pub fn events(&self) -> &Receiver<RunnerEvent> {
        &self.events
    }

    /// Waits for the script to finish and returns the final engine state.
    pub fn wait(mut self) -> Result<EngineSnapshot, Errors> {
        match self.handle.take() {
            Some(handle) => handle.join().map_err(|_| Errors::WorkerPanicked)?,
            None => Err(Errors::WorkerPanicked),
        }
    }
}

impl Drop for Runner {
    fn drop(&mut self) {
        self.alive.store(false, Ordering::SeqCst);

        if let Some(handle) = self.handle.take() {
            info!("Shutting down engine ...");

            if handle.join().is_err() {
                error!("Engine worker thread panicked");
            }
        }
    }
}
