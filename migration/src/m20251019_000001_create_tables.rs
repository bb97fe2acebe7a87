use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Cursos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cursos::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Cursos::Nome).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建学生表，邮箱全局唯一
        manager
            .create_table(
                Table::create()
                    .table(Alunos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alunos::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alunos::Nome).string().not_null())
                    .col(
                        ColumnDef::new(Alunos::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建选课表
        // 学生有选课时禁止删除（RESTRICT），课程删除时级联删除其选课
        manager
            .create_table(
                Table::create()
                    .table(Matriculas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Matriculas::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Matriculas::DataMatricula)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Matriculas::AlunoId).big_integer().not_null())
                    .col(ColumnDef::new(Matriculas::CursoId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matriculas_aluno_id")
                            .from(Matriculas::Table, Matriculas::AlunoId)
                            .to(Alunos::Table, Alunos::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matriculas_curso_id")
                            .from(Matriculas::Table, Matriculas::CursoId)
                            .to(Cursos::Table, Cursos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_matriculas_aluno_id")
                    .table(Matriculas::Table)
                    .col(Matriculas::AlunoId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_matriculas_curso_id")
                    .table(Matriculas::Table)
                    .col(Matriculas::CursoId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Matriculas::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Alunos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Cursos::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Cursos {
    #[sea_orm(iden = "cursos")]
    Table,
    Id,
    Nome,
}

#[derive(DeriveIden)]
enum Alunos {
    #[sea_orm(iden = "alunos")]
    Table,
    Id,
    Nome,
    Email,
}

#[derive(DeriveIden)]
enum Matriculas {
    #[sea_orm(iden = "matriculas")]
    Table,
    Id,
    DataMatricula,
    AlunoId,
    CursoId,
}
