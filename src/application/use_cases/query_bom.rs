use crate::application::dto::{QueryKind, QueryRequest, QueryResponse, QueryResult};
use crate::bom_analysis::domain::{ReportMetadata, Sku};
use crate::bom_analysis::services::{BomTraversal, SimilarityCalculator};
use crate::ports::outbound::{BomReader, ProgressReporter, SkuListReader};
use crate::shared::Result;

/// QueryBomUseCase - loads a BoM and answers one structural or similarity query
///
/// # Type Parameters
/// * `BR` - BomReader implementation
/// * `SR` - SkuListReader implementation
/// * `PR` - ProgressReporter implementation
pub struct QueryBomUseCase<BR, SR, PR> {
    bom_reader: BR,
    sku_list_reader: SR,
    progress_reporter: PR,
}

impl<BR, SR, PR> QueryBomUseCase<BR, SR, PR>
where
    BR: BomReader,
    SR: SkuListReader,
    PR: ProgressReporter,
{
    pub fn new(bom_reader: BR, sku_list_reader: SR, progress_reporter: PR) -> Self {
        Self {
            bom_reader,
            sku_list_reader,
            progress_reporter,
        }
    }

    /// Executes the query described by `request`
    ///
    /// # Errors
    /// Fails when the BoM (or SKU list) cannot be loaded, or when the walk
    /// hits a cycle or the depth limit.
    pub fn execute(&self, request: QueryRequest) -> Result<QueryResponse> {
        // Step 1: Load the table
        self.progress_reporter.report(&format!(
            "📖 Loading BoM from: {}",
            request.bom_path.display()
        ));

        let bom = self.bom_reader.read_bom(&request.bom_path)?;

        self.progress_reporter
            .report(&format!("✅ Loaded {} BoM row(s)", bom.len()));

        // Step 2: Answer the query
        self.progress_reporter
            .report(&format!("🔎 Running {} query", request.query.name()));

        let traversal = BomTraversal::new(&bom).with_max_depth(request.max_depth);
        let calculator = SimilarityCalculator::new(&bom).with_max_depth(request.max_depth);

        let result = match request.query {
            QueryKind::Components { sku } => {
                let root = Sku::from(sku);
                let skus = traversal.descendants(&root)?;
                QueryResult::Components { root, skus }
            }
            QueryKind::Usage { sku } => {
                let root = Sku::from(sku);
                let skus = traversal.ancestors_usage(&root)?;
                QueryResult::Usage { root, skus }
            }
            QueryKind::TopLevel { sku } => {
                let root = Sku::from(sku);
                let skus = traversal.top_level_usage(&root)?;
                QueryResult::TopLevel { root, skus }
            }
            QueryKind::Edges { sku } => {
                let root = Sku::from(sku);
                let edges = traversal.direct_edges(&root)?;
                QueryResult::Edges { root, edges }
            }
            QueryKind::Leaves { sku } => {
                let root = Sku::from(sku);
                let skus = traversal.leaf_components(&root)?;
                QueryResult::Leaves { root, skus }
            }
            QueryKind::Closure { sku, quantity } => {
                let root = Sku::from(sku);
                let closure = traversal.leaf_quantity_closure(&root, quantity)?;
                QueryResult::Closure {
                    root,
                    quantity,
                    closure,
                }
            }
            QueryKind::Similarity { sku_a, sku_b } => {
                self.progress_reporter.report(&format!(
                    "🔍 Calculating similarity between {} and {}",
                    sku_a, sku_b
                ));
                QueryResult::Similarity(calculator.report(&sku_a, &sku_b)?)
            }
            QueryKind::Matrix { skus_path } => {
                let skus = self.sku_list_reader.read_skus(&skus_path)?;
                self.progress_reporter.report(&format!(
                    "📊 Comparing {} product(s) pairwise",
                    skus.len()
                ));

                let matrix = calculator
                    .matrix(&skus, |done, total| {
                        self.progress_reporter.report_progress(done, total, None);
                    })
                    .map_err(|e| {
                        self.progress_reporter
                            .report_error(&format!("❌ Pairwise comparison failed: {}", e));
                        e
                    })?;

                self.progress_reporter
                    .report_completion(&format!("✅ Compared {} product(s)", skus.len()));
                QueryResult::Matrix(matrix)
            }
        };

        Ok(QueryResponse::new(ReportMetadata::generate(bom.len()), result))
    }
}
