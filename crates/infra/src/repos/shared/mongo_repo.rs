use super::repo::{DeleteResult, InsertError};
use anyhow::Result;
use futures::stream::StreamExt;
use mongodb::{
    bson::{self, doc, oid::ObjectId, to_bson, Document},
    error::{ErrorKind, WriteFailure},
    options::FindOptions,
    Collection, Cursor,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::error;

pub trait MongoDocument<E>: Serialize + DeserializeOwned {
    fn to_domain(self) -> E;
    fn from_domain(entity: &E) -> Self;
    fn get_id_filter(&self) -> Document;
}

fn get_id_filter(oid: &ObjectId) -> Document {
    doc! {
        "_id": *oid
    }
}

fn entity_to_persistence<E, D: MongoDocument<E>>(entity: &E) -> Result<Document> {
    let raw = D::from_domain(entity);
    let doc = to_bson(&raw)?
        .as_document()
        .ok_or_else(|| anyhow::anyhow!("Entity did not serialize to a bson document"))?
        .to_owned();
    Ok(doc)
}

/// A stored document that no longer matches the expected shape is logged
/// and treated as absent rather than failing the whole operation
fn persistence_to_entity<E, D: MongoDocument<E>>(doc: Document) -> Option<E> {
    match bson::from_document::<D>(doc) {
        Ok(raw) => Some(raw.to_domain()),
        Err(e) => {
            error!("Unable to decode stored document: {:?}", e);
            None
        }
    }
}

fn is_duplicate_key_error(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_err)) if write_err.code == 11000
    )
}

pub async fn insert<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    entity: &E,
) -> Result<(), InsertError> {
    let doc = entity_to_persistence::<E, D>(entity).map_err(InsertError::Other)?;
    match collection.insert_one(doc, None).await {
        Ok(_) => Ok(()),
        Err(err) if is_duplicate_key_error(&err) => Err(InsertError::DuplicateKey),
        Err(err) => Err(InsertError::Other(anyhow::Error::new(err))),
    }
}

pub async fn find<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    id: &ObjectId,
) -> Option<E> {
    let filter = get_id_filter(id);
    find_one_by::<E, D>(collection, filter).await
}

pub async fn find_one_by<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    filter: Document,
) -> Option<E> {
    let res = collection.find_one(filter, None).await;
    match res {
        Ok(Some(doc)) => persistence_to_entity::<E, D>(doc),
        _ => None,
    }
}

pub async fn find_many_by<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    filter: Document,
    limit: Option<i64>,
) -> Result<Vec<E>> {
    let mut find_options = FindOptions::default();
    find_options.limit = limit;

    let res = collection.find(filter, find_options).await;
    match res {
        Ok(cursor) => Ok(consume_cursor::<E, D>(cursor).await),
        Err(err) => Err(anyhow::Error::new(err)),
    }
}

/// Applies a `$set` with the given field paths and returns how many
/// documents matched the filter
pub async fn update_one_set(
    collection: &Collection<Document>,
    filter: Document,
    set: Document,
) -> Result<i64> {
    let res = collection.update_one(filter, doc! { "$set": set }, None).await?;
    Ok(res.matched_count as i64)
}

pub async fn delete<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    id: &ObjectId,
) -> Option<E> {
    let filter = get_id_filter(id);
    let res = collection.find_one_and_delete(filter, None).await;
    match res {
        Ok(Some(doc)) => persistence_to_entity::<E, D>(doc),
        _ => None,
    }
}

pub async fn delete_many_by(
    collection: &Collection<Document>,
    filter: Document,
) -> Result<DeleteResult> {
    let res = collection.delete_many(filter, None).await?;
    Ok(DeleteResult {
        deleted_count: res.deleted_count as i64,
    })
}

async fn consume_cursor<E, D: MongoDocument<E>>(mut cursor: Cursor<Document>) -> Vec<E> {
    let mut documents = vec![];
    while let Some(result) = cursor.next().await {
        match result {
            Ok(document) => {
                if let Some(entity) = persistence_to_entity::<E, D>(document) {
                    documents.push(entity);
                }
            }
            Err(e) => {
                error!("Error consuming collection cursor: {:?}", e);
            }
        }
    }

    documents
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    struct Named {
        id: ObjectId,
        name: String,
    }

    #[derive(Serialize, Deserialize)]
    struct NamedMongo {
        _id: ObjectId,
        name: String,
    }

    impl MongoDocument<Named> for NamedMongo {
        fn to_domain(self) -> Named {
            Named {
                id: self._id,
                name: self.name,
            }
        }

        fn from_domain(entity: &Named) -> Self {
            Self {
                _id: entity.id,
                name: entity.name.clone(),
            }
        }

        fn get_id_filter(&self) -> Document {
            doc! { "_id": self._id }
        }
    }

    #[test]
    fn decodes_well_formed_documents() {
        let doc = doc! { "_id": ObjectId::new(), "name": "morning run" };
        let entity = persistence_to_entity::<Named, NamedMongo>(doc).expect("To decode");
        assert_eq!(entity.name, "morning run");
    }

    #[test]
    fn treats_malformed_documents_as_absent() {
        let doc = doc! { "_id": ObjectId::new(), "name": 42 };
        assert!(persistence_to_entity::<Named, NamedMongo>(doc).is_none());

        let doc = doc! { "name": "missing id" };
        assert!(persistence_to_entity::<Named, NamedMongo>(doc).is_none());
    }
}
