//! DineInClient - the entry point
//!
//! Bundles the HTTP client, the persisted session and the configuration.
//! Cheap to clone: the session store is shared behind an `Arc` and the
//! underlying reqwest client is reference counted.

use crate::http::HttpClient;
use crate::redirect::{LOGIN_PATH, Redirect};
use crate::session::Session;
use crate::{ClientConfig, ClientResult};

/// Client for the restaurant backend
///
/// # Example
///
/// ```no_run
/// use dinein_client::{ClientConfig, DineInClient};
///
/// # async fn example() -> Result<(), dinein_client::ClientError> {
/// let client = DineInClient::new(ClientConfig::new("http://localhost:4000"))?;
/// client.session().set_business_id(1)?;
/// let tables = client.tables(1).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DineInClient {
    pub(crate) http: HttpClient,
    pub(crate) session: Session,
    pub(crate) config: ClientConfig,
}

impl DineInClient {
    /// Build a client with a session chosen by `config.storage_path`
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let session = Session::from_config(&config)?;
        Self::with_session(config, session)
    }

    /// Build a client over an existing session
    pub fn with_session(config: ClientConfig, session: Session) -> ClientResult<Self> {
        let http = HttpClient::new(&config)?;
        Ok(Self {
            http,
            session,
            config,
        })
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sign the staff user out and go to the login view
    pub fn logout(&self) -> ClientResult<Redirect> {
        self.session.logout()?;
        tracing::info!("Logged out");
        Ok(Redirect::now(LOGIN_PATH))
    }

    /// Staff token, if one is stored
    pub(crate) fn staff_token(&self) -> Option<String> {
        self.session.auth_token()
    }
}
