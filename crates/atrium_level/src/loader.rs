//! One-shot background level loader

use std::path::PathBuf;
use std::thread;

use crossbeam_channel::{bounded, Receiver, TryRecvError};

use crate::error::{LevelError, Result};
use crate::geometry::LevelGeometry;
use crate::import;

/// Loads a level off the frame thread and reports exactly once
///
/// The frame loop calls [`LevelLoader::poll`] until it yields a result;
/// after that every poll returns `None`.
pub struct LevelLoader {
    rx: Receiver<Result<LevelGeometry>>,
    handle: Option<thread::JoinHandle<()>>,
    source: String,
    delivered: bool,
}

impl LevelLoader {
    /// Start importing a level file on a worker thread
    pub fn spawn(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let source = path.display().to_string();
        let (tx, rx) = bounded(1);

        let handle = thread::Builder::new()
            .name("level-loader".to_string())
            .spawn(move || {
                let result = import::import_file(&path);
                // Receiver may be gone if the session was dropped
                let _ = tx.send(result);
            })?;

        log::info!("Loading level '{}'", source);
        Ok(Self {
            rx,
            handle: Some(handle),
            source,
            delivered: false,
        })
    }

    /// Start importing level bytes on a worker thread
    pub fn spawn_bytes(name: impl Into<String>, data: Vec<u8>) -> Result<Self> {
        let source = name.into();
        let worker_name = source.clone();
        let (tx, rx) = bounded(1);

        let handle = thread::Builder::new()
            .name("level-loader".to_string())
            .spawn(move || {
                let _ = tx.send(import::import_slice(&data, &worker_name));
            })?;

        log::info!("Loading level '{}' from memory", source);
        Ok(Self {
            rx,
            handle: Some(handle),
            source,
            delivered: false,
        })
    }

    /// A loader that already holds its result
    pub fn ready(geometry: LevelGeometry) -> Self {
        let (tx, rx) = bounded(1);
        let _ = tx.send(Ok(geometry));
        Self {
            rx,
            handle: None,
            source: "<built-in>".to_string(),
            delivered: false,
        }
    }

    /// Where the level comes from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The result has been handed out
    pub fn is_finished(&self) -> bool {
        self.delivered
    }

    /// Non-blocking check for the load result
    pub fn poll(&mut self) -> Option<Result<LevelGeometry>> {
        if self.delivered {
            return None;
        }
        let result = match self.rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(LevelError::Disconnected),
        };
        self.finish();
        Some(result)
    }

    /// Block until the load result arrives
    pub fn wait(mut self) -> Result<LevelGeometry> {
        if self.delivered {
            return Err(LevelError::Disconnected);
        }
        let result = self.rx.recv().unwrap_or(Err(LevelError::Disconnected));
        self.finish();
        result
    }

    fn finish(&mut self) {
        self.delivered = true;
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl std::fmt::Debug for LevelLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LevelLoader")
            .field("source", &self.source)
            .field("delivered", &self.delivered)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_delivers_once() {
        let mut loader = LevelLoader::ready(LevelGeometry::flat());
        assert!(matches!(loader.poll(), Some(Ok(_))));
        assert!(loader.is_finished());
        assert!(loader.poll().is_none());
    }

    #[test]
    fn test_missing_file_reports_error() {
        let loader = LevelLoader::spawn("does/not/exist.glb").unwrap();
        assert!(matches!(loader.wait(), Err(LevelError::Import { .. })));
    }
}
