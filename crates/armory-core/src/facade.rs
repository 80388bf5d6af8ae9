// ── Remote access facade ──
//
// The only component that talks to the backend. Terminal operations
// return an `Outcome` and publish one matching `Notification`; query
// operations (`exists`, `update`) swallow errors into a boolean.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use armory_api::transport::{TlsMode, TransportConfig};
use armory_api::ArmoryClient;

use crate::config::{FacadeConfig, TlsVerification};
use crate::convert::draft_to_body;
use crate::error::{CoreError, Failure, Operation, Outcome};
use crate::model::{WeaponDraft, WeaponId, WeaponRecord};
use crate::notification::Notification;

const NOTIFICATION_CHANNEL_SIZE: usize = 64;

/// Entry point for UI consumers.
///
/// Cheaply cloneable via `Arc<FacadeInner>`. Holds no session state: each
/// call is one request/response. Calls are meant to be awaited one at a
/// time.
#[derive(Clone)]
pub struct Facade {
    inner: Arc<FacadeInner>,
}

struct FacadeInner {
    config: FacadeConfig,
    client: ArmoryClient,
    notify_tx: broadcast::Sender<Arc<Notification>>,
}

impl Facade {
    /// Build the HTTP client. Does not contact the server.
    pub fn new(config: FacadeConfig) -> Result<Self, CoreError> {
        let transport = build_transport(&config);
        let client = ArmoryClient::new(config.url.as_str(), &transport)?;
        let (notify_tx, _) = broadcast::channel(NOTIFICATION_CHANNEL_SIZE);
        info!(server = %config.url, "weapon facade ready");

        Ok(Self {
            inner: Arc::new(FacadeInner {
                config,
                client,
                notify_tx,
            }),
        })
    }

    pub fn config(&self) -> &FacadeConfig {
        &self.inner.config
    }

    /// Receive every notification published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<Notification>> {
        self.inner.notify_tx.subscribe()
    }

    fn client(&self) -> &ArmoryClient {
        &self.inner.client
    }

    /// Publish the notification for `outcome`, then hand the outcome back.
    fn settle<T>(
        &self,
        outcome: Outcome<T>,
        on_success: impl FnOnce(&T) -> Notification,
    ) -> Outcome<T> {
        let notification = match &outcome {
            Ok(value) => on_success(value),
            Err(failure) => {
                debug!(operation = %failure.operation(), error = %failure, "operation failed");
                Notification::Failed(failure.clone())
            }
        };
        // No subscribers is fine: the caller still has the outcome.
        let _ = self.inner.notify_tx.send(Arc::new(notification));
        outcome
    }

    // ── Terminal operations ──────────────────────────────────────

    /// Load one weapon.
    pub async fn fetch(&self, id: WeaponId) -> Outcome<WeaponRecord> {
        let op = Operation::LoadWeapon;
        let outcome = match self.client().get_weapon(id.get()).await {
            Ok(dto) => WeaponRecord::try_from(dto).map_err(|e| Failure::transport(op, e)),
            Err(e) => Err(Failure::from_api(op, &e)),
        };
        self.settle(outcome, |w| Notification::WeaponLoaded(w.clone()))
    }

    /// Load every weapon in server order. An empty catalogue is a success.
    pub async fn fetch_all(&self) -> Outcome<Vec<WeaponRecord>> {
        let op = Operation::LoadWeapons;
        let outcome = match self.client().list_weapons().await {
            Ok(dtos) => dtos
                .into_iter()
                .map(WeaponRecord::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| Failure::transport(op, e)),
            Err(e) => Err(Failure::from_api(op, &e)),
        };
        self.settle(outcome, |all| Notification::AllWeaponsLoaded(all.clone()))
    }

    /// Create a weapon and return its server-assigned id.
    pub async fn create(&self, draft: &WeaponDraft) -> Outcome<WeaponId> {
        let op = Operation::AddWeapon;
        let body = draft_to_body(draft, None);
        let outcome = match self.client().create_weapon(&body).await {
            Ok(raw) => WeaponId::try_from(raw).map_err(|e| Failure::transport(op, e)),
            Err(e) => Err(Failure::from_api(op, &e)),
        };
        self.settle(outcome, |id| Notification::WeaponAdded(*id))
    }

    /// Delete a weapon.
    pub async fn delete(&self, id: WeaponId) -> Outcome<WeaponId> {
        let outcome = self
            .client()
            .delete_weapon(id.get())
            .await
            .map(|()| id)
            .map_err(|e| Failure::from_api(Operation::DeleteWeapon, &e));
        self.settle(outcome, |id| Notification::WeaponDeleted(*id))
    }

    /// Classify by keyword. The payload is returned exactly as received.
    pub async fn classify(&self, keyword: &str) -> Outcome<String> {
        let outcome = self
            .client()
            .classify(keyword)
            .await
            .map_err(|e| Failure::from_api(Operation::ClassifyKeyword, &e));
        self.settle(outcome, |payload| Notification::KeywordFound {
            keyword: keyword.to_owned(),
            payload: payload.clone(),
        })
    }

    /// Forward a prompt to the text-generation endpoint.
    pub async fn generate(&self, prompt: &str) -> Outcome<String> {
        let outcome = self
            .client()
            .chat(prompt)
            .await
            .map_err(|e| Failure::from_api(Operation::GenerateText, &e));
        self.settle(outcome, |response| Notification::TextGenerated {
            prompt: prompt.to_owned(),
            response: response.clone(),
        })
    }

    // ── Query operations ─────────────────────────────────────────

    /// `true` iff the server answers 200 for this id. Never fails.
    pub async fn exists(&self, id: WeaponId) -> bool {
        match self.client().weapon_exists(id.get()).await {
            Ok(found) => found,
            Err(e) => {
                warn!(%id, error = %e, "weapon existence check failed");
                false
            }
        }
    }

    /// `true` iff the server accepts the update with 200 or 204. Never fails.
    pub async fn update(&self, id: WeaponId, draft: &WeaponDraft) -> bool {
        let body = draft_to_body(draft, Some(id));
        match self.client().update_weapon(id.get(), &body).await {
            Ok(()) => true,
            Err(e) => {
                warn!(%id, error = %e, "weapon update failed");
                false
            }
        }
    }
}

fn build_transport(config: &FacadeConfig) -> TransportConfig {
    let tls = match &config.tls {
        TlsVerification::SystemDefaults => TlsMode::System,
        TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
        TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
    };
    TransportConfig {
        tls,
        timeout: config.timeout,
    }
}
