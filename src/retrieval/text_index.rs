use tantivy::collector::TopDocs;
use tantivy::query::QueryParser;
use tantivy::schema::{Field, STORED, STRING, Schema, TEXT, Value};
use tantivy::{Index, IndexReader, TantivyDocument, doc};
use tracing::{debug, info};

use crate::models::{Document, DocumentMetadata};
use crate::retrieval::chunker::{self, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};
use crate::retrieval::{RetrievalError, RetrievalIndex};

const WRITER_HEAP_BYTES: usize = 50_000_000;

#[derive(Clone, Copy)]
struct Fields {
    content: Field,
    title: Field,
    source: Field,
    url: Field,
}

struct BuiltIndex {
    index: Index,
    reader: IndexReader,
    fields: Fields,
}

/// In-RAM BM25 index over chunked documents. Stands behind the
/// `RetrievalIndex` contract the same way the original system's vector store
/// did: build once, then ask for the top-k passages for a topic.
pub struct TextIndex {
    chunk_size: usize,
    chunk_overlap: usize,
    built: Option<BuiltIndex>,
}

impl Default for TextIndex {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE, DEFAULT_CHUNK_OVERLAP)
    }
}

impl TextIndex {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
            built: None,
        }
    }
}

impl RetrievalIndex for TextIndex {
    fn build(&mut self, documents: &[Document]) -> Result<(), RetrievalError> {
        if documents.is_empty() {
            return Err(RetrievalError::EmptyCorpus);
        }

        let mut schema_builder = Schema::builder();
        let fields = Fields {
            content: schema_builder.add_text_field("content", TEXT | STORED),
            title: schema_builder.add_text_field("title", TEXT | STORED),
            source: schema_builder.add_text_field("source", STRING | STORED),
            url: schema_builder.add_text_field("url", STRING | STORED),
        };
        let schema = schema_builder.build();

        let index = Index::create_in_ram(schema);
        let mut writer = index.writer::<TantivyDocument>(WRITER_HEAP_BYTES)?;

        let mut chunk_count = 0usize;
        for document in documents {
            for chunk in
                chunker::split_text(&document.content, self.chunk_size, self.chunk_overlap)
            {
                writer.add_document(doc!(
                    fields.content => chunk,
                    fields.title => document.metadata.title.clone(),
                    fields.source => document.metadata.source.clone(),
                    fields.url => document.metadata.url.clone().unwrap_or_default(),
                ))?;
                chunk_count += 1;
            }
        }

        if chunk_count == 0 {
            return Err(RetrievalError::EmptyCorpus);
        }

        writer.commit()?;
        let reader = index.reader()?;

        info!(documents = documents.len(), chunks = chunk_count, "index built");
        self.built = Some(BuiltIndex {
            index,
            reader,
            fields,
        });
        Ok(())
    }

    fn retrieve(&self, query: &str, k: usize) -> Result<Vec<Document>, RetrievalError> {
        let built = self.built.as_ref().ok_or(RetrievalError::IndexNotBuilt)?;
        if k == 0 {
            return Ok(Vec::new());
        }

        let searcher = built.reader.searcher();
        let parser =
            QueryParser::for_index(&built.index, vec![built.fields.content, built.fields.title]);
        // Lenient parsing: a topic is free text, not query syntax.
        let (parsed, _errors) = parser.parse_query_lenient(query);

        let top_docs = searcher.search(&parsed, &TopDocs::with_limit(k))?;
        debug!(query, hits = top_docs.len(), "retrieval complete");

        let mut results = Vec::with_capacity(top_docs.len());
        for (_score, address) in top_docs {
            let stored: TantivyDocument = searcher.doc(address)?;
            results.push(document_from_stored(&stored, &built.fields));
        }
        Ok(results)
    }

    fn is_built(&self) -> bool {
        self.built.is_some()
    }
}

fn document_from_stored(stored: &TantivyDocument, fields: &Fields) -> Document {
    let text_of = |field: Field| {
        stored
            .get_first(field)
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string()
    };

    let url = text_of(fields.url);
    Document::new(
        text_of(fields.content),
        DocumentMetadata {
            source: text_of(fields.source),
            title: text_of(fields.title),
            url: (!url.is_empty()).then_some(url),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(title: &str, content: &str, url: Option<&str>) -> Document {
        Document::new(
            format!("{title}\n\n{content}"),
            DocumentMetadata {
                source: "test".to_string(),
                title: title.to_string(),
                url: url.map(str::to_string),
            },
        )
    }

    #[test]
    fn build_rejects_empty_corpus() {
        let mut index = TextIndex::default();
        assert!(matches!(
            index.build(&[]),
            Err(RetrievalError::EmptyCorpus)
        ));
    }

    #[test]
    fn retrieve_before_build_is_a_typed_error() {
        let index = TextIndex::default();
        assert!(matches!(
            index.retrieve("payments", 3),
            Err(RetrievalError::IndexNotBuilt)
        ));
    }

    #[test]
    fn relevant_documents_rank_first() {
        let docs = vec![
            document(
                "Payments growth",
                "Real-time payments networks are being adopted by banks and fintechs across many markets.",
                Some("https://example.com/payments"),
            ),
            document(
                "Gardening tips",
                "Tomatoes grow best with plenty of sunlight and regular watering through the season.",
                None,
            ),
        ];

        let mut index = TextIndex::default();
        index.build(&docs).unwrap();

        let results = index.retrieve("real-time payments adoption", 1).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].metadata.title, "Payments growth");
        assert_eq!(
            results[0].metadata.url.as_deref(),
            Some("https://example.com/payments")
        );
    }

    #[test]
    fn k_bounds_the_result_count() {
        let docs: Vec<Document> = (0..10)
            .map(|i| {
                document(
                    &format!("Payments article {i}"),
                    "Payment infrastructure and payment networks keep expanding steadily.",
                    None,
                )
            })
            .collect();

        let mut index = TextIndex::default();
        index.build(&docs).unwrap();

        let results = index.retrieve("payment", 4).unwrap();
        assert!(results.len() <= 4);
        assert!(!results.is_empty());
    }

    #[test]
    fn unrelated_query_returns_empty() {
        let docs = vec![document(
            "Payments",
            "Payment networks expanded across European banking markets.",
            None,
        )];

        let mut index = TextIndex::default();
        index.build(&docs).unwrap();

        let results = index.retrieve("zebra astronomy telescope", 5).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn query_syntax_is_tolerated() {
        let docs = vec![document(
            "Payments",
            "Payment networks expanded across European banking markets.",
            None,
        )];

        let mut index = TextIndex::default();
        index.build(&docs).unwrap();

        // Unbalanced quotes and operators must not error out.
        assert!(index.retrieve("\"payment AND (", 3).is_ok());
    }

    #[test]
    fn whitespace_only_corpus_is_empty() {
        let docs = vec![Document::new(
            "   \n\n  ",
            DocumentMetadata {
                source: "test".to_string(),
                title: "t".to_string(),
                url: None,
            },
        )];
        let mut index = TextIndex::default();
        // Chunking drops whitespace-only content, leaving nothing to index.
        assert!(matches!(
            index.build(&docs),
            Err(RetrievalError::EmptyCorpus)
        ));
    }
}
