use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, Sender};
use std::thread;
use thiserror::Error;
use tracing::{error, info};

/// Which side of the comparison a document is loaded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSlot {
    Baseline,
    Working,
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0:?} is not valid UTF-8 text")]
    NotUtf8(PathBuf),
}

pub enum LoaderMessage {
    Open(DocumentSlot, PathBuf),
}

pub enum LoaderResponse {
    Loaded {
        slot: DocumentSlot,
        path: PathBuf,
        content: String,
    },
    Failed {
        slot: DocumentSlot,
        path: PathBuf,
        error: String,
    },
}

/// Read a text document from disk.
pub fn read_document(path: &Path) -> Result<String, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| LoadError::NotUtf8(path.to_path_buf()))
}

pub struct Loader {
    receiver: Receiver<LoaderMessage>,
    response_sender: Sender<LoaderResponse>,
}

impl Loader {
    pub fn new(receiver: Receiver<LoaderMessage>, response_sender: Sender<LoaderResponse>) -> Self {
        Self {
            receiver,
            response_sender,
        }
    }

    pub fn run(&self) {
        while let Ok(message) = self.receiver.recv() {
            match message {
                LoaderMessage::Open(slot, path) => {
                    let response = match read_document(&path) {
                        Ok(content) => {
                            info!("Loaded {:?} into {:?}", path, slot);
                            LoaderResponse::Loaded {
                                slot,
                                path,
                                content,
                            }
                        }
                        Err(e) => {
                            error!("{}", e);
                            LoaderResponse::Failed {
                                slot,
                                path,
                                error: e.to_string(),
                            }
                        }
                    };
                    if let Err(e) = self.response_sender.send(response) {
                        error!("Failed to send loaded document: {}", e);
                    }
                }
            }
        }
    }
}

pub fn spawn_loader() -> (Sender<LoaderMessage>, Receiver<LoaderResponse>) {
    let (sender, receiver) = std::sync::mpsc::channel();
    let (response_sender, response_receiver) = std::sync::mpsc::channel();
    thread::spawn(move || {
        let loader = Loader::new(receiver, response_sender);
        loader.run();
    });
    (sender, response_receiver)
}
