/// Use cases module containing application orchestration
mod query_bom;

pub use query_bom::QueryBomUseCase;
