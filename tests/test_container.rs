use pommel::{transform, Transformation};

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
fn add_container_chain() {
    let source = r#"<project>
    <modelVersion>4.0.0</modelVersion>
</project>
"#;
    let expected = r#"<project>
    <modelVersion>4.0.0</modelVersion>

    <build>
        <plugins>
        </plugins>
    </build>
</project>
"#;
    assert_eq!(
        transformed(
            source,
            &[Transformation::add_container_elements_if_needed([
                "build", "plugins"
            ])]
        ),
        expected
    );
}

#[test]
fn add_container_chain_reuses_existing_elements() {
    let source = r#"<project>
    <build>
        <plugins>
        </plugins>
    </build>
</project>
"#;
    assert_eq!(
        transformed(
            source,
            &[Transformation::add_container_elements_if_needed([
                "build", "plugins"
            ])]
        ),
        source
    );
}

#[test]
fn add_container_extends_a_partial_chain() {
    let source = r#"<project>
    <build>
    </build>
</project>
"#;
    let expected = r#"<project>
    <build>
        <pluginManagement>
        </pluginManagement>
    </build>
</project>
"#;
    assert_eq!(
        transformed(
            source,
            &[Transformation::add_container_elements_if_needed([
                "build",
                "pluginManagement"
            ])]
        ),
        expected
    );
}

#[test]
fn self_closing_container_satisfies_the_chain() {
    let source = r#"<project>
    <modelVersion>4.0.0</modelVersion>

    <dependencies/>
</project>
"#;
    assert_eq!(
        transformed(
            source,
            &[Transformation::add_container_elements_if_needed([
                "dependencies"
            ])]
        ),
        source
    );
}

#[test]
fn remove_empty_container() {
    let source = r#"<project>
    <modelVersion>4.0.0</modelVersion>
    <modules>
    </modules>
</project>
"#;
    let expected = r#"<project>
    <modelVersion>4.0.0</modelVersion>
</project>
"#;
    assert_eq!(
        transformed(
            source,
            &[Transformation::remove_container_element_if_empty(
                true,
                true,
                true,
                ["modules"]
            )]
        ),
        expected
    );
}

#[test]
fn keep_container_with_content() {
    let source = r#"<project>
    <modules>
        <module>acme-core</module>
    </modules>
</project>
"#;
    assert_eq!(
        transformed(
            source,
            &[Transformation::remove_container_element_if_empty(
                true,
                true,
                true,
                ["modules"]
            )]
        ),
        source
    );
}

#[test]
fn comments_count_as_content() {
    let source = r#"<project>
    <modules>
        <!-- none yet, but soon -->
    </modules>
</project>
"#;
    assert_eq!(
        transformed(
            source,
            &[Transformation::remove_container_element_if_empty(
                true,
                true,
                true,
                ["modules"]
            )]
        ),
        source
    );
}

#[test]
fn remove_container_regardless_of_content() {
    let source = r#"<project>
    <modelVersion>4.0.0</modelVersion>
    <modules>
        <module>acme-core</module>
    </modules>
</project>
"#;
    let expected = r#"<project>
    <modelVersion>4.0.0</modelVersion>
</project>
"#;
    assert_eq!(
        transformed(
            source,
            &[Transformation::remove_container_element_if_empty(
                true,
                true,
                false,
                ["modules"]
            )]
        ),
        expected
    );
}

#[test]
fn remove_nested_container() {
    let source = r#"<project>
    <build>
        <plugins>
        </plugins>
    </build>
</project>
"#;
    let expected = r#"<project>
    <build>
    </build>
</project>
"#;
    assert_eq!(
        transformed(
            source,
            &[Transformation::remove_container_element_if_empty(
                true,
                true,
                true,
                ["build", "plugins"]
            )]
        ),
        expected
    );
}

#[test]
fn remove_missing_container_is_a_no_op() {
    let source = r#"<project>
    <modelVersion>4.0.0</modelVersion>
</project>
"#;
    assert_eq!(
        transformed(
            source,
            &[Transformation::remove_container_element_if_empty(
                true,
                true,
                true,
                ["build", "plugins"]
            )]
        ),
        source
    );
}
