use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use crate::api::client::StoreClient;
use crate::logger;
use crate::models::{ApiEvent, ApiJob, ApiReply, ApiRequest};

/// Spawn the thread that owns all network I/O. The UI loop stays synchronous;
/// jobs come in over one channel and replies go back over the other, each
/// reply echoing the generation of the job that produced it so the app can
/// discard results for screens that are gone.
pub fn spawn_store_worker(
    client: StoreClient,
    reply_tx: Sender<ApiReply>,
    job_rx: Receiver<ApiJob>,
) -> thread::JoinHandle<()> {
    thread::Builder::new()
        .name("wordbook::store_worker".to_string())
        .spawn(move || {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    logger::log(&format!("failed to build store runtime: {}", e));
                    return;
                }
            };

            while let Ok(job) = job_rx.recv() {
                let event = rt.block_on(execute(&client, job.request));
                let reply = ApiReply {
                    generation: job.generation,
                    event,
                };
                if reply_tx.send(reply).is_err() {
                    break;
                }
            }
            logger::log("store worker channel disconnected, exiting");
        })
        .expect("failed to spawn store worker thread")
}

async fn execute(client: &StoreClient, request: ApiRequest) -> ApiEvent {
    let action = request.action();
    let result = match request {
        ApiRequest::FetchProfiles => client.profiles().await.map(ApiEvent::ProfilesLoaded),
        ApiRequest::CreateProfile { name } => client
            .create_profile(&name)
            .await
            .map(ApiEvent::ProfileCreated),
        ApiRequest::DeleteProfile { profile_id } => client
            .delete_profile(profile_id)
            .await
            .map(|_| ApiEvent::ProfileDeleted(profile_id)),
        ApiRequest::FetchWords { profile_id } => {
            client.words(profile_id).await.map(ApiEvent::WordsLoaded)
        }
        ApiRequest::CreateWord { profile_id, word } => client
            .create_word(profile_id, &word)
            .await
            .map(ApiEvent::WordCreated),
        ApiRequest::UpdateWord { word_id, patch } => client
            .update_word(word_id, &patch)
            .await
            .map(ApiEvent::WordUpdated),
        ApiRequest::DeleteWord { word_id } => client
            .delete_word(word_id)
            .await
            .map(|_| ApiEvent::WordDeleted(word_id)),
    };

    match result {
        Ok(event) => event,
        Err(e) => {
            logger::log(&format!("{} failed: {}", action.describe(), e));
            ApiEvent::Failed {
                action,
                error: e.to_string(),
            }
        }
    }
}
