pub mod context_assembler;
pub mod qa_service;
pub mod retriever;

pub use context_assembler::ContextAssembler;
pub use qa_service::QaService;
pub use retriever::Retriever;
