use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[cfg(test)]
use mockall::automock;

use log::{trace, warn};

use super::scene::{Point, Scene};
use crate::runner::RunnerEvent;

/// Blocks the script until `count` frames have been presented.
#[cfg_attr(test, automock)]
pub trait FrameWaiter : Send {
    fn wait_for_frames(&mut self, count: u16, scene: &Scene);
}

pub struct FrameClock {
    frame_duration: Duration,
    frame: u64,
    alive: Arc<AtomicBool>,
    events: Sender<RunnerEvent>,
}

impl FrameClock {
    pub fn new(hz: u32, alive: Arc<AtomicBool>, events: Sender<RunnerEvent>) -> FrameClock {
        FrameClock {
            frame_duration: match hz {
                0 => Duration::from_nanos(0),
                _ => Duration::from_nanos(1_000_000_000 / hz as u64),
            },
            frame: 0,
            alive,
            events,
        }
    }

    fn present(&mut self, camera: Point) {
        self.frame += 1;
        trace!("frame {} camera {:?}", self.frame, camera);

        if let Err(err) = self.events.send(RunnerEvent::Frame { frame: self.frame, camera }) {
            warn!("Failed to publish frame {}: {}", self.frame, err);
        }
    }
}

impl FrameWaiter for FrameClock {
    fn wait_for_frames(&mut self, count: u16, scene: &Scene) {
        for _ in 0..count {
            if self.alive.load(Ordering::SeqCst) && self.frame_duration > Duration::from_nanos(0) {
                thread::sleep(self.frame_duration);
            }

            self.present(scene.camera);
        }
    }
}
