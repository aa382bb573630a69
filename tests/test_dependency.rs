use pommel::{transform, Gavtcs, GavtcsComparator, Transformation};

fn transformed(source: &str, transformations: &[Transformation]) -> String {
    let mut result = String::new();
    transform(
        transformations,
        "pom.xml",
        || source.to_string(),
        |out| result = out,
    )
    .unwrap();
    result
}

#[test]
fn add_managed_dependency_creates_the_whole_chain() {
    let source = r#"<project>
    <modelVersion>4.0.0</modelVersion>
</project>
"#;
    let expected = r#"<project>
    <modelVersion>4.0.0</modelVersion>

    <dependencyManagement>
        <dependencies>
            <dependency>
                <groupId>org.acme</groupId>
                <artifactId>acme-bom</artifactId>
                <version>1.2.3</version>
                <type>pom</type>
                <scope>import</scope>
            </dependency>
        </dependencies>
    </dependencyManagement>
</project>
"#;
    assert_eq!(
        transformed(
            source,
            &[Transformation::add_managed_dependency(Gavtcs::import_bom(
                "org.acme", "acme-bom", "1.2.3"
            ))]
        ),
        expected
    );
}

#[test]
fn add_managed_dependency_appends_to_existing_entries() {
    let source = r#"<project>
    <dependencyManagement>
        <dependencies>
            <dependency>
                <groupId>org.acme</groupId>
                <artifactId>acme-bom</artifactId>
                <version>1.2.3</version>
                <type>pom</type>
                <scope>import</scope>
            </dependency>
        </dependencies>
    </dependencyManagement>
</project>
"#;
    let expected = r#"<project>
    <dependencyManagement>
        <dependencies>
            <dependency>
                <groupId>org.acme</groupId>
                <artifactId>acme-bom</artifactId>
                <version>1.2.3</version>
                <type>pom</type>
                <scope>import</scope>
            </dependency>
            <dependency>
                <groupId>org.acme</groupId>
                <artifactId>acme-core</artifactId>
                <version>1.2.3</version>
            </dependency>
        </dependencies>
    </dependencyManagement>
</project>
"#;
    assert_eq!(
        transformed(
            source,
            &[Transformation::add_managed_dependency(Gavtcs::new(
                "org.acme",
                "acme-core",
                "1.2.3"
            ))]
        ),
        expected
    );
}

#[test]
fn managed_dependency_is_not_added_twice() {
    let source = r#"<project>
    <dependencyManagement>
        <dependencies>
            <dependency>
                <groupId>org.acme</groupId>
                <artifactId>acme-bom</artifactId>
                <version>1.2.3</version>
                <type>pom</type>
                <scope>import</scope>
            </dependency>
        </dependencies>
    </dependencyManagement>
</project>
"#;
    assert_eq!(
        transformed(
            source,
            &[Transformation::add_managed_dependency(Gavtcs::import_bom(
                "org.acme", "acme-bom", "2.0.0"
            ))]
        ),
        source
    );
}

#[test]
fn add_dependency_inserts_before_test_scope() {
    let source = r#"<project>
    <dependencies>
        <dependency>
            <groupId>org.acme</groupId>
            <artifactId>acme-core</artifactId>
            <version>1.0.0</version>
        </dependency>
        <dependency>
            <groupId>org.junit.jupiter</groupId>
            <artifactId>junit-jupiter</artifactId>
            <version>5.9.1</version>
            <scope>test</scope>
        </dependency>
    </dependencies>
</project>
"#;
    let expected = r#"<project>
    <dependencies>
        <dependency>
            <groupId>org.acme</groupId>
            <artifactId>acme-core</artifactId>
            <version>1.0.0</version>
        </dependency>
        <dependency>
            <groupId>org.acme</groupId>
            <artifactId>acme-extra</artifactId>
            <version>1.0.0</version>
        </dependency>
        <dependency>
            <groupId>org.junit.jupiter</groupId>
            <artifactId>junit-jupiter</artifactId>
            <version>5.9.1</version>
            <scope>test</scope>
        </dependency>
    </dependencies>
</project>
"#;
    assert_eq!(
        transformed(
            source,
            &[Transformation::add_dependency_if_needed(
                Gavtcs::new("org.acme", "acme-extra", "1.0.0"),
                GavtcsComparator::ScopeAndTypeFirst
            )]
        ),
        expected
    );
}

#[test]
fn add_dependency_appends_when_nothing_sorts_later() {
    let source = r#"<project>
    <dependencies>
        <dependency>
            <groupId>org.acme</groupId>
            <artifactId>acme-core</artifactId>
            <version>1.0.0</version>
        </dependency>
    </dependencies>
</project>
"#;
    let expected = r#"<project>
    <dependencies>
        <dependency>
            <groupId>org.acme</groupId>
            <artifactId>acme-core</artifactId>
            <version>1.0.0</version>
        </dependency>
        <dependency>
            <groupId>org.junit.jupiter</groupId>
            <artifactId>junit-jupiter</artifactId>
            <version>5.9.1</version>
            <scope>test</scope>
        </dependency>
    </dependencies>
</project>
"#;
    assert_eq!(
        transformed(
            source,
            &[Transformation::add_dependency_if_needed(
                Gavtcs::test_jar("org.junit.jupiter", "junit-jupiter", "5.9.1"),
                GavtcsComparator::ScopeAndTypeFirst
            )]
        ),
        expected
    );
}

#[test]
fn equivalent_dependency_is_not_added_twice() {
    let source = r#"<project>
    <dependencies>
        <dependency>
            <groupId>org.acme</groupId>
            <artifactId>acme-core</artifactId>
            <version>1.0.0</version>
        </dependency>
    </dependencies>
</project>
"#;
    // same coordinates at another version still count as present
    assert_eq!(
        transformed(
            source,
            &[Transformation::add_dependency_if_needed(
                Gavtcs::new("org.acme", "acme-core", "2.0.0"),
                GavtcsComparator::ScopeAndTypeFirst
            )]
        ),
        source
    );
}

#[test]
fn add_virtual_dependency_with_exclusions() {
    let source = r#"<project>
    <dependencies>
    </dependencies>
</project>
"#;
    let expected = r#"<project>
    <dependencies>
        <dependency>
            <groupId>org.acme</groupId>
            <artifactId>acme-deployment</artifactId>
            <version>1.0.0</version>
            <type>pom</type>
            <scope>test</scope>
            <exclusions>
                <exclusion>
                    <groupId>*</groupId>
                    <artifactId>*</artifactId>
                </exclusion>
            </exclusions>
        </dependency>
    </dependencies>
</project>
"#;
    assert_eq!(
        transformed(
            source,
            &[Transformation::add_dependency_if_needed(
                Gavtcs::virtual_dep("org.acme", "acme-deployment", "1.0.0"),
                GavtcsComparator::ScopeAndTypeFirst
            )]
        ),
        expected
    );
}

#[test]
fn group_first_comparator_orders_by_coordinates() {
    let source = r#"<project>
    <dependencies>
        <dependency>
            <groupId>org.zeta</groupId>
            <artifactId>zeta-core</artifactId>
            <version>1.0.0</version>
        </dependency>
    </dependencies>
</project>
"#;
    let expected = r#"<project>
    <dependencies>
        <dependency>
            <groupId>org.acme</groupId>
            <artifactId>acme-core</artifactId>
            <version>1.0.0</version>
        </dependency>
        <dependency>
            <groupId>org.zeta</groupId>
            <artifactId>zeta-core</artifactId>
            <version>1.0.0</version>
        </dependency>
    </dependencies>
</project>
"#;
    assert_eq!(
        transformed(
            source,
            &[Transformation::add_dependency_if_needed(
                Gavtcs::new("org.acme", "acme-core", "1.0.0"),
                GavtcsComparator::GroupFirst
            )]
        ),
        expected
    );
}
