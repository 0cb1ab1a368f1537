//! DDL rendering: tables, join tables, sequences.
//!
//! Column order inside `create table (...)` is fixed: key columns, plain
//! columns, join columns, then the `primary key`, `foreign key` and
//! `unique` constraints.

use super::SqlStatementGenerator;
use crate::sql::ddl::{
    ColumnDeclaration, ForeignKeyDeclaration, SqlCreateJoinTable, SqlCreateSequence,
    SqlCreateTable, SqlDropSequence, SqlDropTable, SqlPk,
};
use crate::sql::dialect::SqlDialect;
use crate::sql::error::{SqlError, SqlResult};
use crate::sql::token::{Token, TokenStream};
use crate::sql::types::{DdlType, TypeSize};

impl SqlStatementGenerator {
    pub fn export_create_table(&self, table: &SqlCreateTable) -> SqlResult<String> {
        self.finish("create table", self.create_table_tokens(table))
            .map(|e| e.sql)
    }

    pub fn export_create_join_table(&self, table: &SqlCreateJoinTable) -> SqlResult<String> {
        self.finish("create join table", self.create_join_table_tokens(table))
            .map(|e| e.sql)
    }

    pub fn export_create_sequence(&self, sequence: &SqlCreateSequence) -> SqlResult<String> {
        self.finish("create sequence", self.create_sequence_tokens(sequence))
            .map(|e| e.sql)
    }

    pub fn export_drop_sequence(&self, sequence: &SqlDropSequence) -> SqlResult<String> {
        self.finish("drop sequence", self.drop_sequence_tokens(sequence))
            .map(|e| e.sql)
    }

    pub fn export_drop_table(&self, table: &SqlDropTable) -> SqlResult<String> {
        self.finish("drop table", Ok(self.drop_table_tokens(table)))
            .map(|e| e.sql)
    }

    /// Type part of a column declaration, e.g. `varchar(50)` or `decimal(19,2)`.
    ///
    /// A verbatim `column_definition` wins over the mapped type.
    pub fn build_column_definition(&self, column: &ColumnDeclaration) -> SqlResult<String> {
        let ddl = column.ddl_data.as_ref();
        if let Some(definition) = ddl.and_then(|d| d.column_definition.as_deref()) {
            return Ok(definition.to_string());
        }

        let length = ddl.and_then(|d| d.length);
        if column.database_type == DdlType::String && length.is_none() {
            return Err(SqlError::VarcharLengthNotSpecified {
                column: column.name.clone(),
            });
        }

        let size = TypeSize {
            length: length.unwrap_or_default(),
            precision: ddl
                .and_then(|d| d.precision)
                .unwrap_or(self.default_precision),
            scale: ddl.and_then(|d| d.scale).unwrap_or(self.default_scale),
        };
        Ok(self.dialect.emit_data_type(column.database_type, size))
    }

    /// Full column fragment: `name type[ not null]`.
    pub fn export_column_declaration(&self, column: &ColumnDeclaration) -> SqlResult<String> {
        Ok(self.column_tokens(column)?.serialize(self.dialect))
    }

    // =========================================================================
    // Token builders
    // =========================================================================

    pub(super) fn create_table_tokens(&self, table: &SqlCreateTable) -> SqlResult<TokenStream> {
        let mut definitions = Vec::new();

        match &table.pk {
            SqlPk::Simple(pk) if pk.identity => {
                let mut ts = self.column_type_tokens(&pk.column)?;
                ts.space().append(&self.dialect.emit_identity());
                definitions.push(ts);
            }
            pk => {
                for column in pk.columns() {
                    definitions.push(self.not_null_column_tokens(column)?);
                }
            }
        }

        for column in &table.columns {
            definitions.push(self.column_tokens(column)?);
        }

        for fk in &table.foreign_keys {
            for column in fk.mapping.join_columns() {
                definitions.push(self.column_tokens(column)?);
            }
        }

        let mut pk = TokenStream::new();
        pk.push(Token::Primary)
            .space()
            .push(Token::Key)
            .space()
            .append(&self.name_list(table.pk.constraint_column_names()));
        definitions.push(pk);

        self.push_key_constraints(&mut definitions, &table.foreign_keys);

        Ok(self.create_table_shell(&table.table_name, &definitions))
    }

    pub(super) fn create_join_table_tokens(&self, table: &SqlCreateJoinTable) -> SqlResult<TokenStream> {
        if table.foreign_keys.is_empty() {
            return Err(SqlError::invalid("create join table", "no foreign keys"));
        }

        let mut definitions = Vec::new();
        for fk in &table.foreign_keys {
            for column in fk.mapping.join_columns() {
                definitions.push(self.not_null_column_tokens(column)?);
            }
        }
        self.push_key_constraints(&mut definitions, &table.foreign_keys);

        Ok(self.create_table_shell(&table.table_name, &definitions))
    }

    pub(super) fn create_sequence_tokens(&self, sequence: &SqlCreateSequence) -> SqlResult<TokenStream> {
        self.require_sequences()?;
        Ok(self.dialect.emit_create_sequence(
            &self.quoting.quote_qualified(&sequence.name),
            sequence.initial_value,
            sequence.allocation_size,
        ))
    }

    pub(super) fn drop_sequence_tokens(&self, sequence: &SqlDropSequence) -> SqlResult<TokenStream> {
        self.require_sequences()?;
        Ok(self
            .dialect
            .emit_drop_sequence(&self.quoting.quote_qualified(&sequence.name)))
    }

    pub(super) fn drop_table_tokens(&self, table: &SqlDropTable) -> TokenStream {
        let mut ts = TokenStream::new();
        ts.push(Token::Drop)
            .space()
            .push(Token::Table)
            .space()
            .ident(self.quoting.quote_qualified(&table.name));
        ts
    }

    fn create_table_shell(&self, name: &str, definitions: &[TokenStream]) -> TokenStream {
        let mut ts = TokenStream::new();
        ts.push(Token::Create)
            .space()
            .push(Token::Table)
            .space()
            .ident(self.quoting.quote_qualified(name))
            .space()
            .lparen()
            .append_comma_separated(definitions)
            .rparen();
        ts
    }

    /// `foreign key (...) references t (...)` per key, then `unique (...)`
    /// for the one-to-one mappings.
    fn push_key_constraints(&self, definitions: &mut Vec<TokenStream>, foreign_keys: &[ForeignKeyDeclaration]) {
        for fk in foreign_keys {
            let columns: Vec<&str> = fk
                .mapping
                .join_columns()
                .into_iter()
                .map(|c| c.name.as_str())
                .collect();
            let mut ts = TokenStream::new();
            ts.push(Token::Foreign)
                .space()
                .push(Token::Key)
                .space()
                .append(&self.name_list(columns))
                .space()
                .push(Token::References)
                .space()
                .ident(self.quoting.quote_qualified(&fk.referenced_table))
                .space()
                .append(&self.name_list(fk.mapping.referenced_pk().constraint_column_names()));
            definitions.push(ts);
        }

        for fk in foreign_keys.iter().filter(|fk| fk.mapping.is_unique()) {
            let columns: Vec<&str> = fk
                .mapping
                .join_columns()
                .into_iter()
                .map(|c| c.name.as_str())
                .collect();
            let mut ts = TokenStream::new();
            ts.push(Token::Unique).space().append(&self.name_list(columns));
            definitions.push(ts);
        }
    }

    /// `(a, b)`
    fn name_list(&self, names: Vec<&str>) -> TokenStream {
        let items: Vec<TokenStream> = names
            .into_iter()
            .map(|n| Token::Ident(self.quoting.quote(n)).into())
            .collect();
        let mut ts = TokenStream::new();
        ts.lparen().append_comma_separated(&items).rparen();
        ts
    }

    /// `name type`
    fn column_type_tokens(&self, column: &ColumnDeclaration) -> SqlResult<TokenStream> {
        let mut ts = TokenStream::new();
        ts.ident(self.quoting.quote(&column.name))
            .space()
            .raw(self.build_column_definition(column)?);
        Ok(ts)
    }

    /// `name type[ not null]`, honouring the column's own nullability.
    fn column_tokens(&self, column: &ColumnDeclaration) -> SqlResult<TokenStream> {
        let not_null = column
            .ddl_data
            .as_ref()
            .and_then(|d| d.nullable)
            .is_some_and(|nullable| !nullable);
        let mut ts = self.column_type_tokens(column)?;
        if not_null {
            ts.space().push(Token::Not).space().push(Token::Null);
        }
        Ok(ts)
    }

    /// `name type not null` regardless of the declared nullability.
    fn not_null_column_tokens(&self, column: &ColumnDeclaration) -> SqlResult<TokenStream> {
        let mut ts = self.column_type_tokens(column)?;
        ts.space().push(Token::Not).space().push(Token::Null);
        Ok(ts)
    }
}
