use crate::construction::ConstructionContext;
use crate::construction::RuleOutcome;
use crate::construction::rules::rules_for;
use crate::document::PartId;
use crate::QueryDocument;
use crate::schema::Schema;
use gqldoc_parser::SyntaxNodeId;
use gqldoc_parser::SyntaxTree;

/// Runs the construction rules over every node of a syntax tree.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentConstructionRuleProcessor;
impl DocumentConstructionRuleProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Builds `document` from `tree`. Returns `false` if a rule aborted
    /// construction; the document then holds whatever was built so far.
    pub fn execute(
        &self,
        schema: &Schema,
        tree: &SyntaxTree,
        document: &mut QueryDocument,
    ) -> bool {
        let completed = self.visit(schema, tree, document, tree.root(), None);
        tracing::debug!(
            parts = document.part_count(),
            completed,
            "constructed query document",
        );
        completed
    }

    fn visit(
        &self,
        schema: &Schema,
        tree: &SyntaxTree,
        document: &mut QueryDocument,
        node: SyntaxNodeId,
        parent_part: Option<PartId>,
    ) -> bool {
        let mut context = ConstructionContext {
            created_part: None,
            document,
            node,
            parent_part,
            schema,
            tree,
        };
        for rule in rules_for(tree.tag(node)) {
            match rule.execute(&mut context) {
                RuleOutcome::Continue => (),
                RuleOutcome::SkipBranch => {
                    tracing::trace!(rule = rule.name(), node = node.index(), "skipping branch");
                    return true;
                },
                RuleOutcome::Abort => {
                    tracing::debug!(rule = rule.name(), node = node.index(), "construction aborted");
                    return false;
                },
            }
        }

        let parent_part = context.created_part.or(parent_part);
        for child in tree.children(node) {
            if !self.visit(schema, tree, document, *child, parent_part) {
                return false;
            }
        }
        true
    }
}
