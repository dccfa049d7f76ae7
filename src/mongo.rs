// src/mongo.rs
use crate::config::DbConfig;
use crate::error::{BoxError, StoreError};
use crate::grape::Grape;
use crate::seed::GrapeStore;
use bson::{doc, Document};
use log::{debug, info};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

/// Builds a connection string from a `host:port` pair. Values that already
/// carry a scheme are passed through untouched.
pub fn connection_uri(host_port: &str) -> String {
    if host_port.contains("://") {
        host_port.to_string()
    } else {
        format!("mongodb://{}", host_port)
    }
}

/// A grape collection on a live MongoDB deployment.
///
/// Release it with [`GrapeStore::close`], or hand it to
/// [`crate::seed::replace_and_close`] which does so on every path.
pub struct MongoStore {
    client: Client,
    collection: Collection<Document>,
}

impl MongoStore {
    pub async fn connect(config: &DbConfig) -> Result<Self, StoreError> {
        if config.host_port.is_empty() {
            return Err(StoreError::MissingParameter("host_port"));
        }
        if config.db_name.is_empty() {
            return Err(StoreError::MissingParameter("db_name"));
        }
        if config.collection.is_empty() {
            return Err(StoreError::MissingParameter("collection"));
        }

        let connect_err = |source: mongodb::error::Error| StoreError::Connect {
            host_port: config.host_port.clone(),
            source: source.into(),
        };

        let mut client_options = ClientOptions::parse(connection_uri(&config.host_port).as_str())
            .await
            .map_err(connect_err)?;
        client_options.app_name = Some("grape-init".to_string());
        client_options.server_selection_timeout = Some(config.connect_timeout);
        client_options.connect_timeout = Some(config.connect_timeout);

        let client = Client::with_options(client_options).map_err(connect_err)?;
        let db = client.database(&config.db_name);

        // The driver connects lazily; ping so an unreachable server fails here.
        if let Err(e) = db.run_command(doc! { "ping": 1 }).await {
            client.shutdown().await;
            return Err(connect_err(e));
        }
        info!("Connected to {}/{}", config.host_port, config.db_name);

        Ok(Self {
            collection: db.collection::<Document>(&config.collection),
            client,
        })
    }
}

impl GrapeStore for MongoStore {
    fn collection_name(&self) -> &str {
        self.collection.name()
    }

    async fn remove_all(&self) -> Result<u64, BoxError> {
        let result = self.collection.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }

    async fn insert(&self, grape: &Grape) -> Result<(), BoxError> {
        let document = bson::to_document(grape)?;
        self.collection.insert_one(document).await?;
        Ok(())
    }

    async fn close(self) {
        self.client.shutdown().await;
        debug!("Closed connection");
    }
}
