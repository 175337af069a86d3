//! Sample curriculum documents.

/// Two courses, one edge (`Programmation` → `Algorithmique` on `variable`),
/// no consistency issue.
pub const SMALL_CURRICULUM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<cursus>
  <course title="Programmation">
    <semester>S1</semester>
    <new-concept>variable, boucle</new-concept>
    <dependency-concept></dependency-concept>
  </course>
  <course title="Algorithmique">
    <semester>S2</semester>
    <new-concept>tri</new-concept>
    <dependency-concept>variable</dependency-concept>
  </course>
</cursus>
"#;

/// Exactly two issues: `k` introduced by both `A` and `B`, and `pile`
/// required by `C` but never introduced.
pub const CONFLICTING_CURRICULUM: &str = r#"<cursus>
  <course title="A">
    <semester>S1</semester>
    <new-concept>k</new-concept>
    <dependency-concept/>
  </course>
  <course title="B">
    <semester>S2</semester>
    <new-concept>k</new-concept>
    <dependency-concept/>
  </course>
  <course title="C">
    <semester>S2</semester>
    <new-concept/>
    <dependency-concept>pile</dependency-concept>
  </course>
</cursus>
"#;

/// A five-course chain over four semesters with one multi-label edge
/// (`Automates` → `Compilation` on `automate, grammaire`).
pub const LICENCE_CURRICULUM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<cursus>
  <course title="Programmation">
    <semester>S1</semester>
    <new-concept>variable, boucle</new-concept>
    <dependency-concept></dependency-concept>
  </course>
  <course title="Logique">
    <semester>S2</semester>
    <new-concept>ensemble</new-concept>
    <dependency-concept></dependency-concept>
  </course>
  <course title="Algorithmique">
    <semester>S2</semester>
    <new-concept>tri</new-concept>
    <dependency-concept>boucle, variable</dependency-concept>
  </course>
  <course title="Automates">
    <semester>S4</semester>
    <new-concept>automate, grammaire</new-concept>
    <dependency-concept>ensemble</dependency-concept>
  </course>
  <course title="Compilation">
    <semester>S5</semester>
    <new-concept>compilateur</new-concept>
    <dependency-concept>automate, grammaire, tri</dependency-concept>
  </course>
</cursus>
"#;
