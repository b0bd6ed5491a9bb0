use gs_client::{AttributesReply, ClientResult, DataReply, ExplorerClient, LoadReply};
use gs_select::{Command, Epoch};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

/// What came back from the backend.
#[derive(Debug)]
pub enum FetchPayload {
    NetworkLoad {
        network: String,
        reply: ClientResult<LoadReply>,
    },
    Components(ClientResult<Vec<String>>),
    StaticData(ClientResult<DataReply>),
    Attributes(ClientResult<AttributesReply>),
    SeriesData(ClientResult<DataReply>),
}

/// A finished fetch, tagged with the epoch it was issued under. The app
/// drops outcomes whose epoch is no longer current, so a slow fetch can
/// never overwrite the state of a newer selection.
#[derive(Debug)]
pub struct FetchOutcome {
    pub epoch: Epoch,
    pub payload: FetchPayload,
}

/// Runs blocking backend calls off the UI thread.
///
/// One channel outlives all fetches; each dispatched command gets its own
/// short-lived thread (overlapping fetches are expected, the epoch tag
/// sorts them out on receipt).
pub struct FetchWorker {
    client: ExplorerClient,
    tx: Sender<FetchOutcome>,
    pub outcome_rx: Receiver<FetchOutcome>,
}

impl FetchWorker {
    pub fn new(client: ExplorerClient) -> Self {
        let (tx, outcome_rx) = channel();
        Self {
            client,
            tx,
            outcome_rx,
        }
    }

    pub fn dispatch(&self, epoch: Epoch, command: Command) {
        let client = self.client.clone();
        let tx = self.tx.clone();

        // Detached on purpose: overlapping fetches each get their own
        // thread and report back over the shared channel.
        let _ = thread::spawn(move || {
            let payload = match command {
                Command::LoadNetwork { network } => {
                    let reply = client.load_network(&network);
                    FetchPayload::NetworkLoad { network, reply }
                }
                Command::FetchComponents => FetchPayload::Components(client.components()),
                Command::FetchStatic { component } => {
                    FetchPayload::StaticData(client.static_data(&component))
                }
                Command::FetchAttributes { component } => {
                    FetchPayload::Attributes(client.attributes(&component))
                }
                Command::FetchSeries {
                    component,
                    attribute,
                } => FetchPayload::SeriesData(client.varying_data(&component, &attribute)),
            };
            // The app may have shut down; a dead channel just means the
            // result is unwanted.
            let _ = tx.send(FetchOutcome { epoch, payload });
        });
    }
}
